//! Error types for register access and interrupt topology.

use heapless::Vec;

use crate::bus::BusCause;
use crate::irq::{AcIrq, LINE_COUNT};

/// Errors surfaced to sub-devices through the register/IRQ call surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A physical bus transaction failed. `reg` is the 16-bit logical
    /// register the caller addressed, which for a paged access may be the
    /// page-select leg rather than the data leg.
    Bus { reg: u16, cause: BusCause },
    /// A handler is already registered for this virtual line.
    AlreadySubscribed { line: AcIrq },
    /// The upstream clock refused to switch on.
    Clock(ClockFault),
}

/// Fault from the upstream clock provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFault;

/// Detach was refused because virtual lines are still subscribed.
///
/// Tearing the handle down with live handlers would leave enable bits set
/// with nowhere to deliver the next event, so the caller must unsubscribe
/// the listed lines and retry.
#[derive(Debug)]
pub struct DetachError {
    pub active: Vec<AcIrq, LINE_COUNT>,
}
