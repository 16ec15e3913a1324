//! Interrupt demultiplexer.
//!
//! The chip raises a single physical interrupt; the top-level IRQ status
//! word says which feature blocks are shouting. Each feature block gets a
//! virtual line a sub-device can subscribe a handler to. The line table is
//! fixed at compile time; only the handlers come and go.

use heapless::Vec;
use log::{error, warn};

use crate::bridge::RegIo;
use crate::constants::sys;
use crate::error::Error;

/// Number of virtual interrupt lines.
pub const LINE_COUNT: usize = 5;

/// Virtual interrupt lines fanned out from the chip's interrupt pad.
///
/// The discriminant doubles as the bit position of the line in both the
/// top-level IRQ enable and IRQ status registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcIrq {
    /// RTC alarm 0 fired
    RtcAlarm0 = 0,
    /// RTC wakeup alarm fired
    RtcAlarm1 = 1,
    /// TV cable plugged in
    TvePlugIn = 2,
    /// TV cable pulled out
    TvePlugOut = 3,
    /// Audio codec event (DAP / DRC)
    Audio = 4,
}

impl AcIrq {
    pub const ALL: [AcIrq; LINE_COUNT] = [
        AcIrq::RtcAlarm0,
        AcIrq::RtcAlarm1,
        AcIrq::TvePlugIn,
        AcIrq::TvePlugOut,
        AcIrq::Audio,
    ];

    /// Bit of this line in the top-level enable/status registers.
    pub const fn mask(self) -> u16 {
        1 << (self as u16)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Callback surface a sub-device registers for one virtual line.
///
/// `service` runs inside the device's access guard, so all register traffic
/// must go through the accessor passed in; calling back into the device
/// handle from a handler would self-deadlock.
pub trait IrqHandler {
    /// Handle one occurrence of the line's event.
    fn service(&mut self, regs: &mut dyn RegIo) -> Result<(), Error>;

    /// Fault sink for errors raised while this line was dispatched.
    /// The default just logs; override to route into a sub-device channel.
    fn fault(&mut self, line: AcIrq, err: Error) {
        error!("irq line {:?} fault: {:?}", line, err);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    Disabled,
    EnabledIdle,
    Pending,
    Handled,
}

struct Line<'a> {
    state: LineState,
    handler: Option<&'a mut (dyn IrqHandler + Send)>,
}

impl<'a> Line<'a> {
    fn empty() -> Line<'a> {
        Line {
            state: LineState::Disabled,
            handler: None,
        }
    }
}

/// Registry of virtual lines, mutated only by subscribe/unsubscribe and
/// walked by dispatch. Lives under the device's access guard.
pub(crate) struct LineTable<'a> {
    lines: [Line<'a>; LINE_COUNT],
}

impl<'a> LineTable<'a> {
    pub fn new() -> Self {
        LineTable {
            lines: [
                Line::empty(),
                Line::empty(),
                Line::empty(),
                Line::empty(),
                Line::empty(),
            ],
        }
    }

    pub fn subscribe(
        &mut self,
        regs: &mut dyn RegIo,
        line: AcIrq,
        handler: &'a mut (dyn IrqHandler + Send),
    ) -> Result<(), Error> {
        let slot = &mut self.lines[line.index()];
        if slot.handler.is_some() {
            return Err(Error::AlreadySubscribed { line });
        }
        regs.modify(sys::IRQ_ENABLE, line.mask(), line.mask())?;
        slot.handler = Some(handler);
        slot.state = LineState::EnabledIdle;
        Ok(())
    }

    /// Idempotent: unsubscribing a disabled line is a no-op. On a bus fault
    /// the handler stays registered so the line is never left half-disabled.
    pub fn unsubscribe(&mut self, regs: &mut dyn RegIo, line: AcIrq) -> Result<(), Error> {
        let slot = &mut self.lines[line.index()];
        if slot.handler.is_none() {
            return Ok(());
        }
        regs.modify(sys::IRQ_ENABLE, line.mask(), 0)?;
        slot.handler = None;
        slot.state = LineState::Disabled;
        Ok(())
    }

    /// Walk one interrupt cycle: a single status read, then per set line
    /// handler invocation and a write-1-to-clear ack of exactly that bit.
    /// Bits raised by the chip after the status read are left for the next
    /// cycle. Caller holds the access guard for the whole walk.
    pub fn dispatch(&mut self, regs: &mut dyn RegIo) -> Result<(), Error> {
        let status = regs.read(sys::IRQ_STATUS)?;
        if status == 0 {
            return Ok(());
        }

        for line in AcIrq::ALL.iter().copied() {
            let bit = line.mask();
            if status & bit == 0 {
                continue;
            }

            let slot = &mut self.lines[line.index()];
            match slot.handler.as_mut() {
                None => {
                    // A stuck status bit would re-trigger the shared pad
                    // forever; ack and drop.
                    warn!("irq line {:?} set with no subscriber, dropping", line);
                    if let Err(err) = regs.write(sys::IRQ_STATUS, bit) {
                        error!("irq line {:?} ack failed: {:?}", line, err);
                    }
                }
                Some(handler) => {
                    slot.state = LineState::Pending;
                    let served = handler.service(regs);
                    slot.state = LineState::Handled;
                    // Ack even after a handler fault; both errors land in
                    // this subscriber's sink and the walk keeps going.
                    let acked = regs.write(sys::IRQ_STATUS, bit);
                    if let Err(err) = served {
                        handler.fault(line, err);
                    }
                    if let Err(err) = acked {
                        handler.fault(line, err);
                    }
                    slot.state = LineState::EnabledIdle;
                }
            }
        }
        Ok(())
    }

    /// Lines not currently Disabled, in line order.
    pub fn active(&self) -> Vec<AcIrq, LINE_COUNT> {
        let mut active = Vec::new();
        for line in AcIrq::ALL.iter().copied() {
            if self.lines[line.index()].state != LineState::Disabled {
                // cannot overflow: one slot per line
                let _ = active.push(line);
            }
        }
        active
    }
}
