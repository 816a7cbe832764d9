//! Host-side services the watchface runs against.
//!
//! The traits here are the seam between the pure controller/renderer stack
//! and the machine it runs on; [`host`] provides the Linux implementations
//! and [`pumps`] turns the polling services into event streams.

use chrono::NaiveDateTime;
use face_core::Result;
use face_companion::Dictionary;
use face_renderer::Frame;

pub mod host;
pub mod pumps;

pub use host::{
    BluezConnection, ConsoleDisplay, LogHaptics, StdoutOutbox, SysfsBattery, SystemClock,
};

/// Wall-clock source.
pub trait Clock: Send {
    fn now(&self) -> NaiveDateTime;
}

/// Watch battery charge reader.
pub trait BatteryService: Send {
    fn percent(&self) -> Result<u8>;
}

/// Paired-phone link status reader.
pub trait ConnectionService: Send {
    fn connected(&self) -> bool;
}

/// Vibration motor.
pub trait Haptics: Send {
    fn double_pulse(&mut self);
}

/// Outbound channel to the companion app.
pub trait Outbox: Send {
    fn send(&mut self, message: &Dictionary) -> Result<()>;
}

/// Where composed frames end up.
pub trait DisplaySink: Send {
    fn present(&mut self, frame: &Frame) -> Result<()>;
}
