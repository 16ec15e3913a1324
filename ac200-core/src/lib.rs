//! Core access layer for the AC200 multi-function companion chip
//! (clock generator, audio codec, Ethernet PHY, TV encoder, RTC).
//!
//! The chip is reached over a narrow serial bus with a one-byte address
//! window; this crate provides the paged register bridge on top of that
//! bus, the serialized access guard, the interrupt demultiplexer fanning
//! the single chip interrupt out to per-feature virtual lines, and the
//! device handle sub-device drivers are constructed against.

#![cfg_attr(not(test), no_std)]

pub mod bridge;
pub mod bus;
pub mod constants;
pub mod device;
pub mod error;
pub mod irq;

#[cfg(test)]
pub(crate) mod testutil;
