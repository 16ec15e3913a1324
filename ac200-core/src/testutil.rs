//! Shared test doubles: a software chip port and a host clock.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::bus::{BusCause, TwiPort};
use crate::constants::{audio, sys, twi};
use crate::error::ClockFault;
use crate::device::HostClock;

#[derive(Debug, Default)]
struct FakeState {
    latch: u8,
    /// registers keyed by logical (page << 8 | offset) address;
    /// interface registers keyed by 0xFF00 | offset
    regs: HashMap<u16, u16>,
    /// successful page-latch writes, in order
    page_writes: Vec<u8>,
    fail: Option<BusCause>,
}

/// Cloneable handle onto a software model of the chip's bus behavior:
/// page latch, interface offsets reachable from any page, and a
/// write-1-to-clear top-level IRQ status register.
#[derive(Debug, Clone)]
pub(crate) struct FakePort(Arc<Mutex<FakeState>>);

impl FakePort {
    pub fn new() -> Self {
        FakePort(Arc::new(Mutex::new(FakeState::default())))
    }

    /// Store a value at a logical address, bypassing the bus.
    pub fn poke(&self, reg: u16, value: u16) {
        self.0.lock().unwrap().regs.insert(reg, value);
    }

    /// Read a logical address, bypassing the bus.
    pub fn peek(&self, reg: u16) -> u16 {
        *self.0.lock().unwrap().regs.get(&reg).unwrap_or(&0)
    }

    /// Assert status bits the way the chip would.
    pub fn raise_irq(&self, bits: u16) {
        let mut state = self.0.lock().unwrap();
        let status = state.regs.entry(sys::IRQ_STATUS).or_insert(0);
        *status |= bits;
    }

    pub fn page_writes(&self) -> Vec<u8> {
        self.0.lock().unwrap().page_writes.clone()
    }

    /// Make the next transaction fail with `cause`.
    pub fn fail_next(&self, cause: BusCause) {
        self.0.lock().unwrap().fail = Some(cause);
    }

    fn key(state: &FakeState, addr: u8) -> u16 {
        match addr {
            // page 0x30 decodes this offset as audio DRC_LKE (0x303E), not
            // as the bus-mode interface cell
            twi::CHANGE_TO_RSB if state.latch == 0x30 => audio::DRC_LKE,
            twi::CHANGE_TO_RSB | twi::PAD_DELAY | twi::REG_ADDR_H => 0xFF00 | addr as u16,
            _ => (state.latch as u16) << 8 | addr as u16,
        }
    }
}

impl TwiPort for FakePort {
    fn read(&mut self, addr: u8) -> Result<u16, BusCause> {
        let mut state = self.0.lock().unwrap();
        if let Some(cause) = state.fail.take() {
            return Err(cause);
        }
        if addr == twi::REG_ADDR_H {
            return Ok(state.latch as u16);
        }
        let key = Self::key(&state, addr);
        Ok(*state.regs.get(&key).unwrap_or(&0))
    }

    fn write(&mut self, addr: u8, value: u16) -> Result<(), BusCause> {
        let mut state = self.0.lock().unwrap();
        if let Some(cause) = state.fail.take() {
            return Err(cause);
        }
        if addr == twi::REG_ADDR_H {
            state.latch = value as u8;
            state.page_writes.push(value as u8);
            return Ok(());
        }
        let key = Self::key(&state, addr);
        if key == sys::IRQ_STATUS {
            // top-level status is write-1-to-clear
            let status = state.regs.entry(key).or_insert(0);
            *status &= !value;
        } else {
            state.regs.insert(key, value);
        }
        Ok(())
    }
}

/// Host clock double tracking enable/disable calls.
pub(crate) struct TestClock {
    enabled: AtomicBool,
    refuse: bool,
}

impl TestClock {
    pub fn new() -> Self {
        TestClock {
            enabled: AtomicBool::new(false),
            refuse: false,
        }
    }

    pub fn failing() -> Self {
        TestClock {
            enabled: AtomicBool::new(false),
            refuse: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

impl HostClock for TestClock {
    fn rate_hz(&self) -> u32 {
        24_000_000
    }

    fn enable(&self) -> Result<(), ClockFault> {
        if self.refuse {
            return Err(ClockFault);
        }
        self.enabled.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn disable(&self) {
        self.enabled.store(false, Ordering::SeqCst);
    }
}
