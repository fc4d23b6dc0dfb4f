use std::process::ExitCode;

use nescpu::{Cartridge, Cpu, CpuBus, MemoryBus};

/// Instructions traced when no count is given on the command line.
const DEFAULT_STEPS: usize = 40;

fn build_demo_ines() -> Vec<u8> {
    // iNES header
    let mut header = Vec::with_capacity(16);
    header.extend_from_slice(b"NES\x1A");
    header.push(1); // 1 x 16KB PRG
    header.push(1); // 1 x 8KB CHR
    header.push(0); // flags6 (horizontal mirroring, no trainer, no battery)
    header.push(0); // flags7
    header.push(1); // PRG-RAM size in 8KB units
    header.extend_from_slice(&[0u8; 7]); // padding

    // PRG ROM 16KB
    let mut prg = vec![0u8; 16 * 1024];

    // Program at $8000 (offset 0x0000 in PRG)
    let program: &[u8] = &[
        0xA9, 0x10, // LDA #$10
        0x69, 0x05, // ADC #$05 => A = 0x15
        0x8D, 0x00, 0x02, // STA $0200
        0xE8, // INX
        0xD0, 0xFD, // BNE -3 -> loop until X wraps to 0
        0x00, 0xEA, // BRK (padding byte)
    ];
    prg[..program.len()].copy_from_slice(program);

    // Vectors (NMI, RESET, IRQ/BRK) at the top of the bank, mirrored to $FFFA-$FFFF.
    let (nmi, reset, irq): (u16, u16, u16) = (0x8000, 0x8000, 0x8000);
    prg[0x3FFA..0x3FFC].copy_from_slice(&nmi.to_le_bytes());
    prg[0x3FFC..0x3FFE].copy_from_slice(&reset.to_le_bytes());
    prg[0x3FFE..0x4000].copy_from_slice(&irq.to_le_bytes());

    // CHR ROM 8KB (zeros)
    let chr = vec![0u8; 8 * 1024];

    let mut rom = header;
    rom.extend_from_slice(&prg);
    rom.extend_from_slice(&chr);
    rom
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);

    // Usage: nescpu [ROM.nes] [STEPS]
    let cart = match args.next() {
        Some(path) => Cartridge::from_ines_file(&path),
        None => Cartridge::from_ines_bytes(&build_demo_ines()),
    };
    let cart = match cart {
        Ok(cart) => cart,
        Err(e) => {
            eprintln!("failed to load cartridge: {e}");
            return ExitCode::FAILURE;
        }
    };
    let steps = match args.next().map(|s| s.parse::<usize>()) {
        None => DEFAULT_STEPS,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("invalid step count: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut bus = CpuBus::with_cartridge(cart);
    let mut cpu = Cpu::new();
    if let Err(e) = cpu.reset(&mut bus) {
        eprintln!("reset failed: {e}");
        return ExitCode::FAILURE;
    }

    for _ in 0..steps {
        let result = cpu
            .trace_line(&mut bus)
            .and_then(|line| cpu.step(&mut bus).map(|_| line));
        match result {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("CPU stopped at ${:04X}: {e}", cpu.pc());
                return ExitCode::FAILURE;
            }
        }
    }

    println!("cycles: {}", cpu.cycles());
    println!("mem[0x0200]: 0x{:02X}", bus.read(0x0200));
    ExitCode::SUCCESS
}
