//! Device handle.
//!
//! One `Ac200` per physical chip. The handle owns the paged bridge and the
//! interrupt line table behind a single per-device lock: page-select
//! sequences, read-modify-writes and the interrupt status walk all need to
//! be atomic against each other, and register traffic to this chip is
//! low-rate control-plane work, so one coarse lock is the right trade.

use log::info;
use spin::Mutex;

use crate::bridge::{PagedBridge, RegIo};
use crate::bus::TwiPort;
use crate::constants::sys;
use crate::error::{ClockFault, DetachError, Error};
use crate::irq::{AcIrq, IrqHandler, LineTable};

/// Upstream module clock feeding the chip's PLL and codec blocks.
///
/// The clock is shared with the platform; the handle switches it on at
/// attach and releases its use at detach, never owning it exclusively.
/// Sub-devices reach it through [`Ac200::clock`].
pub trait HostClock {
    /// Input clock rate in Hz.
    fn rate_hz(&self) -> u32;

    fn enable(&self) -> Result<(), ClockFault>;

    fn disable(&self);
}

struct Inner<'a, P: TwiPort> {
    bridge: PagedBridge<P>,
    lines: LineTable<'a>,
}

/// Shared handle every sub-device driver is constructed against.
///
/// All four register/IRQ operations of the binding surface live here;
/// sub-devices never touch the physical bus.
pub struct Ac200<'a, P: TwiPort> {
    clk: &'a (dyn HostClock + Sync),
    inner: Mutex<Inner<'a, P>>,
}

impl<'a, P: TwiPort> Ac200<'a, P> {
    /// Bring the chip up: enable the upstream clock, probe the version
    /// register, mask every interrupt and drain stale status.
    pub fn attach(port: P, clk: &'a (dyn HostClock + Sync)) -> Result<Self, Error> {
        clk.enable().map_err(Error::Clock)?;
        let mut bridge = PagedBridge::new(port);
        match Self::bring_up(&mut bridge) {
            Ok(()) => Ok(Ac200 {
                clk,
                inner: Mutex::new(Inner {
                    bridge,
                    lines: LineTable::new(),
                }),
            }),
            Err(err) => {
                clk.disable();
                Err(err)
            }
        }
    }

    fn bring_up(bridge: &mut PagedBridge<P>) -> Result<(), Error> {
        let version = bridge.read(sys::VERSION)?;
        info!("chip version 0x{:04X}", version);
        // Mask everything and drain whatever a previous life left pending.
        bridge.write(sys::IRQ_ENABLE, 0)?;
        bridge.write(sys::IRQ_STATUS, 0xFFFF)?;
        Ok(())
    }

    /// Read a 16-bit register.
    pub fn read(&self, reg: u16) -> Result<u16, Error> {
        self.inner.lock().bridge.read(reg)
    }

    /// Write a 16-bit register.
    pub fn write(&self, reg: u16, value: u16) -> Result<(), Error> {
        self.inner.lock().bridge.write(reg, value)
    }

    /// Replace the bits selected by `mask` with `value`, atomically with
    /// respect to every other operation on this handle.
    pub fn modify(&self, reg: u16, mask: u16, value: u16) -> Result<(), Error> {
        self.inner.lock().bridge.modify(reg, mask, value)
    }

    /// Register `handler` on a virtual line and enable it at the chip.
    /// One handler per line; a second subscribe fails.
    pub fn subscribe(
        &self,
        line: AcIrq,
        handler: &'a mut (dyn IrqHandler + Send),
    ) -> Result<(), Error> {
        let mut inner = self.inner.lock();
        let Inner { bridge, lines } = &mut *inner;
        lines.subscribe(bridge, line, handler)
    }

    /// Disable a virtual line and drop its handler. No-op when the line is
    /// already disabled.
    pub fn unsubscribe(&self, line: AcIrq) -> Result<(), Error> {
        let mut inner = self.inner.lock();
        let Inner { bridge, lines } = &mut *inner;
        lines.unsubscribe(bridge, line)
    }

    /// Entry point for the chip's physical interrupt signal: one status
    /// read, then per-line handler dispatch and acknowledge, all in one
    /// critical section so no status bit is lost between read and clear.
    pub fn service_irq(&self) -> Result<(), Error> {
        let mut inner = self.inner.lock();
        let Inner { bridge, lines } = &mut *inner;
        lines.dispatch(bridge)
    }

    /// The upstream clock, for sub-devices deriving their own rates.
    pub fn clock(&self) -> &'a (dyn HostClock + Sync) {
        self.clk
    }

    /// Tear the handle down and hand the bus port back.
    ///
    /// Refused while any line is still subscribed or mid-dispatch: a
    /// dangling handler would otherwise fire into freed state. On refusal
    /// the untouched handle is returned alongside the error.
    pub fn detach(self) -> Result<P, (Self, DetachError)> {
        {
            let inner = self.inner.lock();
            let active = inner.lines.active();
            if !active.is_empty() {
                drop(inner);
                return Err((self, DetachError { active }));
            }
        }
        let Ac200 { clk, inner } = self;
        clk.disable();
        Ok(inner.into_inner().bridge.into_port())
    }
}
