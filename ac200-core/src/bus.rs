//! Physical bus seam.
//!
//! The chip sits on a bus whose native addressing window is a single byte;
//! everything above that (paging, serialization) is layered on top by the
//! bridge. Platform code supplies the actual transport by implementing
//! `TwiPort`.

/// One-byte-addressed transaction primitive of the underlying serial bus.
///
/// Implementations perform exactly one bus transaction per call and do not
/// retry; retry policy belongs to the register-level caller.
pub trait TwiPort {
    /// Read the 16-bit value at the given low-byte address.
    fn read(&mut self, addr: u8) -> Result<u16, BusCause>;

    /// Write a 16-bit value to the given low-byte address.
    fn write(&mut self, addr: u8, value: u16) -> Result<(), BusCause>;
}

/// Transaction-level fault raised by a `TwiPort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusCause {
    /// Transfer did not complete in time
    Timeout,
    /// Device did not acknowledge
    Nack,
    /// Malformed or unexpected device response
    Protocol,
}
