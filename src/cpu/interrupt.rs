//! Pending hardware interrupt kinds.

use crate::cpu::state::{IRQ_VECTOR, NMI_VECTOR};

/// At most one request is held at a time. NMI outranks IRQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interrupt {
    #[default]
    None,
    Nmi,
    Irq,
}

impl Interrupt {
    /// Vector the handler address is read from; `None` for no request.
    pub fn vector(self) -> Option<u16> {
        match self {
            Interrupt::None => None,
            Interrupt::Nmi => Some(NMI_VECTOR),
            Interrupt::Irq => Some(IRQ_VECTOR),
        }
    }

    #[inline]
    pub fn is_pending(self) -> bool {
        self != Interrupt::None
    }
}
