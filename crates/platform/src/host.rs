use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{debug, info};

use face_companion::{codec, Dictionary};
use face_core::Result;
use face_renderer::Frame;

use crate::{BatteryService, Clock, ConnectionService, DisplaySink, Haptics, Outbox};

/// Local wall-clock time via the system timezone.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Battery charge from the Linux sysfs power-supply interface.
///
/// Reads the first of `BAT0`..`BAT2` that exists. Hosts with no battery
/// (desktop, VM) report full charge so the gauge renders something sane.
#[derive(Debug)]
pub struct SysfsBattery {
    root: PathBuf,
}

impl Default for SysfsBattery {
    fn default() -> Self {
        Self::new("/sys/class/power_supply")
    }
}

impl SysfsBattery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl BatteryService for SysfsBattery {
    fn percent(&self) -> Result<u8> {
        for name in ["BAT0", "BAT1", "BAT2"] {
            let base = self.root.join(name);
            if !base.exists() {
                continue;
            }
            let capacity = std::fs::read_to_string(base.join("capacity"))?;
            return Ok(parse_capacity(&capacity).unwrap_or(0));
        }
        Ok(100)
    }
}

fn parse_capacity(raw: &str) -> Option<u8> {
    raw.trim().parse().ok()
}

/// Phone link status approximated by the presence of a powered Bluetooth
/// adapter.
#[derive(Debug)]
pub struct BluezConnection {
    adapter: PathBuf,
}

impl Default for BluezConnection {
    fn default() -> Self {
        Self {
            adapter: PathBuf::from("/sys/class/bluetooth/hci0"),
        }
    }
}

impl BluezConnection {
    pub fn new(adapter: impl Into<PathBuf>) -> Self {
        Self {
            adapter: adapter.into(),
        }
    }
}

impl ConnectionService for BluezConnection {
    fn connected(&self) -> bool {
        Path::new(&self.adapter).exists()
    }
}

/// Stand-in vibration motor: the host has none, so the alert is logged.
#[derive(Debug, Default)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn double_pulse(&mut self) {
        info!("haptics: double pulse");
    }
}

/// Companion channel over stdout, one encoded message per line.
///
/// stdout carries ONLY companion traffic; logs go to stderr.
#[derive(Debug, Default)]
pub struct StdoutOutbox;

impl Outbox for StdoutOutbox {
    fn send(&mut self, message: &Dictionary) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", codec::encode_line(message))?;
        stdout.flush()?;
        Ok(())
    }
}

/// Presents frames to the terminal.
///
/// With the preview disabled this is a sink that keeps the latest frame
/// implicit in the scene; with it enabled each frame is dumped to stderr
/// as a block of ASCII art.
#[derive(Debug)]
pub struct ConsoleDisplay {
    ascii_preview: bool,
}

impl ConsoleDisplay {
    pub fn new(ascii_preview: bool) -> Self {
        Self { ascii_preview }
    }
}

impl DisplaySink for ConsoleDisplay {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        debug!("frame presented, {} lit pixels", frame.lit_count());
        if self.ascii_preview {
            eprint!("{}", frame.to_ascii());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_parses_trimmed_sysfs_value() {
        assert_eq!(parse_capacity("57\n"), Some(57));
        assert_eq!(parse_capacity(" 100 "), Some(100));
        assert_eq!(parse_capacity("unknown"), None);
    }

    #[test]
    fn batteryless_host_reports_full() {
        let battery = SysfsBattery::new("/nonexistent/power_supply");
        assert_eq!(battery.percent().unwrap(), 100);
    }

    #[test]
    fn clock_produces_a_current_year() {
        use chrono::Datelike;
        assert!(SystemClock.now().year() >= 2024);
    }
}
