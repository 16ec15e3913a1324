//! Paged register bridge.
//!
//! Flat 16-bit register offsets are reached through a narrow bus by latching
//! the high address byte into an interface register, then transacting at the
//! low byte. The bridge caches the latched page and skips redundant latch
//! writes. It holds no other register state and issues a real bus
//! transaction on every call.

use log::{debug, trace};

use crate::bus::TwiPort;
use crate::constants::twi;
use crate::error::Error;

/// Logical 16-bit register access surface.
///
/// This is the only register interface sub-devices and interrupt handlers
/// see; nothing downstream touches the physical bus directly.
pub trait RegIo {
    /// Read a 16-bit register.
    fn read(&mut self, reg: u16) -> Result<u16, Error>;

    /// Write a 16-bit register.
    fn write(&mut self, reg: u16, value: u16) -> Result<(), Error>;

    /// Replace the bits selected by `mask` with the corresponding bits of
    /// `value`, as one read-then-write unit.
    fn modify(&mut self, reg: u16, mask: u16, value: u16) -> Result<(), Error>;
}

pub(crate) struct PagedBridge<P: TwiPort> {
    port: P,
    /// Last page latched into the chip. None until the first latch write;
    /// the power-on latch value is not documented, so the first paged
    /// access always selects explicitly.
    page: Option<u8>,
}

impl<P: TwiPort> PagedBridge<P> {
    pub fn new(port: P) -> Self {
        PagedBridge { port, page: None }
    }

    pub fn into_port(self) -> P {
        self.port
    }

    /// The interface set is exactly three fixed addresses. Matching the
    /// full 16-bit address matters: the catalog also holds registers whose
    /// low byte collides with an interface offset (audio DRC_LKE, 0x303E),
    /// and those must page like any other register.
    fn is_interface(reg: u16) -> bool {
        reg == twi::CHANGE_TO_RSB as u16
            || reg == twi::PAD_DELAY as u16
            || reg == twi::REG_ADDR_H as u16
    }

    /// Ensure the page for `reg` is latched, returning the low-byte offset
    /// to transact at. Interface registers pass straight through.
    fn select(&mut self, reg: u16) -> Result<u8, Error> {
        if Self::is_interface(reg) {
            return Ok(reg as u8);
        }

        let offset = reg as u8;
        let page = (reg >> 8) as u8;
        if self.page != Some(page) {
            self.port
                .write(twi::REG_ADDR_H, page as u16)
                .map_err(|cause| Error::Bus { reg, cause })?;
            debug!("page latch -> 0x{:02X}", page);
            self.page = Some(page);
        }
        Ok(offset)
    }
}

impl<P: TwiPort> RegIo for PagedBridge<P> {
    fn read(&mut self, reg: u16) -> Result<u16, Error> {
        let offset = self.select(reg)?;
        let value = self
            .port
            .read(offset)
            .map_err(|cause| Error::Bus { reg, cause })?;
        trace!("read  0x{:04X} = 0x{:04X}", reg, value);
        Ok(value)
    }

    fn write(&mut self, reg: u16, value: u16) -> Result<(), Error> {
        let offset = self.select(reg)?;
        self.port
            .write(offset, value)
            .map_err(|cause| Error::Bus { reg, cause })?;
        trace!("write 0x{:04X} = 0x{:04X}", reg, value);
        // A direct write to the latch re-targets every following paged
        // transaction, so the cache must follow it. Keyed on the logical
        // address, not the offset: a paged register at some 0x..FE is data,
        // not a latch update.
        if reg == twi::REG_ADDR_H as u16 {
            self.page = Some(value as u8);
        }
        Ok(())
    }

    fn modify(&mut self, reg: u16, mask: u16, value: u16) -> Result<(), Error> {
        let current = self.read(reg)?;
        self.write(reg, (current & !mask) | (value & mask))
    }
}
