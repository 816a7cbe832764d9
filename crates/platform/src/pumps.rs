use std::time::Duration;

use chrono::Timelike;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::warn;

use face_companion::{decode_line, weather_update};
use face_core::Event;

use crate::{BatteryService, Clock, ConnectionService};

/// Spawn a task that sends [`Event::Minute`] once per wall-clock minute,
/// aligned to the minute boundary.
///
/// Stops automatically when the receiver is dropped.
pub fn spawn_minute_ticks(clock: impl Clock + 'static, tx: mpsc::Sender<Event>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let now = clock.now();
            let until_boundary = 60 - u64::from(now.second()).min(59);
            time::sleep(Duration::from_secs(until_boundary)).await;

            if tx.send(Event::Minute(clock.now())).await.is_err() {
                break; // receiver dropped
            }
        }
    })
}

/// Spawn a task that polls the watch battery every `interval` and sends
/// [`Event::BatteryChanged`] when the reading changes.
pub fn spawn_battery_monitor(
    battery: impl BatteryService + 'static,
    interval: Duration,
    tx: mpsc::Sender<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        let mut last: Option<u8> = None;

        loop {
            ticker.tick().await;

            let percent = match battery.percent() {
                Ok(percent) => percent,
                Err(err) => {
                    warn!("battery read failed: {err}");
                    continue;
                }
            };
            if last == Some(percent) {
                continue;
            }
            last = Some(percent);

            if tx.send(Event::BatteryChanged(percent)).await.is_err() {
                break;
            }
        }
    })
}

/// Spawn a task that polls the phone link every `interval` and sends
/// [`Event::ConnectionChanged`] when the status changes.
///
/// Only transitions are forwarded; the haptic-on-every-notification
/// behavior therefore depends on what the underlying service reports,
/// exactly as the watch's own runtime delivered it.
pub fn spawn_connection_monitor(
    connection: impl ConnectionService + 'static,
    interval: Duration,
    tx: mpsc::Sender<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        let mut last: Option<bool> = None;

        loop {
            ticker.tick().await;

            let connected = connection.connected();
            if last == Some(connected) {
                continue;
            }
            last = Some(connected);

            if tx.send(Event::ConnectionChanged(connected)).await.is_err() {
                break;
            }
        }
    })
}

/// Spawn a task that reads companion messages from stdin, one encoded
/// message per line, and forwards them as [`Event::InboxReceived`].
///
/// Malformed lines become [`Event::InboxDropped`]; the pump keeps reading.
pub fn spawn_inbox(tx: mpsc::Sender<Event>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let event = match lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => match decode_line(&line) {
                    Ok(dict) => Event::InboxReceived(weather_update(&dict)),
                    Err(err) => Event::InboxDropped(err.to_string()),
                },
                Ok(None) => break, // companion closed the channel
                Err(err) => Event::InboxDropped(err.to_string()),
            };

            if tx.send(event).await.is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    struct SteppingBattery {
        readings: std::sync::Mutex<std::vec::IntoIter<u8>>,
    }

    impl SteppingBattery {
        fn new(readings: Vec<u8>) -> Self {
            Self {
                readings: std::sync::Mutex::new(readings.into_iter()),
            }
        }
    }

    impl BatteryService for SteppingBattery {
        fn percent(&self) -> face_core::Result<u8> {
            let mut readings = self.readings.lock().unwrap();
            Ok(readings.next().unwrap_or(70))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn battery_monitor_reports_only_changes() {
        let (tx, mut rx) = mpsc::channel(8);
        let battery = SteppingBattery::new(vec![70, 70, 69]);
        spawn_battery_monitor(battery, Duration::from_secs(60), tx);

        assert_eq!(rx.recv().await, Some(Event::BatteryChanged(70)));
        // The repeated 70 is suppressed; the next event is the drop to 69.
        assert_eq!(rx.recv().await, Some(Event::BatteryChanged(69)));
    }

    #[tokio::test(start_paused = true)]
    async fn minute_ticker_fires_on_the_boundary() {
        let at = chrono::NaiveDate::from_ymd_opt(2024, 3, 3)
            .unwrap()
            .and_hms_opt(10, 17, 42)
            .unwrap();

        let (tx, mut rx) = mpsc::channel(8);
        spawn_minute_ticks(FixedClock(at), tx);

        assert_eq!(rx.recv().await, Some(Event::Minute(at)));
    }
}
