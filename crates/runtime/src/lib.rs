//! Event loop for the watchface.
//!
//! Owns the Tokio runtime and wires together all background tasks:
//! - Minute ticker (clock redraws, periodic weather requests)
//! - Companion inbox on stdin (weather, phone battery)
//! - Watch battery monitor (sysfs poll)
//! - Phone link monitor (Bluetooth adapter poll)
//!
//! Events flow into [`WatchfaceController::update`]; the effects it returns
//! are executed here against the platform services, and dirty elements are
//! repainted into the scene.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use face_companion::weather_request;
use face_config::FaceConfig;
use face_core::{Effect, Element, Event, Result, WatchfaceController};
use face_platform::{
    pumps, BatteryService, BluezConnection, Clock, ConnectionService, ConsoleDisplay, DisplaySink,
    Haptics, LogHaptics, Outbox, StdoutOutbox, SysfsBattery, SystemClock,
};
use face_renderer::Scene;
use face_theme::{FaceStyle, Layout};

/// Watch battery poll interval.
const BATTERY_POLL: Duration = Duration::from_secs(60);
/// Phone link poll interval.
const CONNECTION_POLL: Duration = Duration::from_secs(15);
/// Event queue depth shared by all pumps.
const EVENT_QUEUE: usize = 32;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Start the watchface. Returns when the companion channel closes or a
/// shutdown signal arrives.
pub fn run(config: FaceConfig) -> Result<()> {
    tokio::runtime::Runtime::new()?.block_on(run_loop(config))
}

async fn run_loop(config: FaceConfig) -> Result<()> {
    let layout = Layout::for_shape(config.face.shape);
    let mut scene = Scene::new(layout, FaceStyle::default());
    let mut face = WatchfaceController::new(config.face.clock);

    let clock = SystemClock;
    let battery = SysfsBattery::default();
    let connection = BluezConnection::default();
    let mut haptics = LogHaptics;
    let mut outbox = StdoutOutbox;
    let mut display = ConsoleDisplay::new(config.face.ascii_preview);

    // ── Startup seed ──────────────────────────────────────────────────────────
    // Populate the state before the first paint. Seeding the clock goes
    // through `refresh_time` so a launch at :00/:30 does not fire a weather
    // request; battery and link go through the normal event path, so
    // starting disconnected pulses immediately, just like a fresh install
    // on a watch out of range.
    let mut startup = face.refresh_time(clock.now());
    match battery.percent() {
        Ok(percent) => startup.extend(face.update(Event::BatteryChanged(percent))),
        Err(err) => warn!("initial battery read failed: {err}"),
    }
    startup.extend(face.update(Event::ConnectionChanged(connection.connected())));
    execute_effects(&mut face, startup, &mut outbox, &mut haptics);

    scene.redraw_all(face.state())?;
    display.present(scene.frame())?;

    // ── Event pumps ───────────────────────────────────────────────────────────
    let (tx, mut rx) = mpsc::channel(EVENT_QUEUE);
    pumps::spawn_minute_ticks(clock, tx.clone());
    pumps::spawn_battery_monitor(battery, BATTERY_POLL, tx.clone());
    pumps::spawn_connection_monitor(connection, CONNECTION_POLL, tx.clone());
    pumps::spawn_inbox(tx);

    // ── Event loop ────────────────────────────────────────────────────────────
    loop {
        let event = tokio::select! {
            maybe = rx.recv() => match maybe {
                Some(event) => event,
                None => break, // every pump gone
            },
            signal = tokio::signal::ctrl_c() => {
                if let Err(err) = signal {
                    error!("signal listener failed: {err}");
                }
                Event::Shutdown
            }
        };

        if matches!(event, Event::Shutdown) {
            info!("shutting down");
            break;
        }
        if let Event::InboxDropped(reason) = &event {
            error!("companion message dropped: {reason}");
        }

        let effects = face.update(event);
        let dirty = execute_effects(&mut face, effects, &mut outbox, &mut haptics);

        if !dirty.is_empty() {
            scene.redraw(face.state(), &dirty)?;
            display.present(scene.frame())?;
        }
    }

    Ok(())
}

// ── Effects ───────────────────────────────────────────────────────────────────

/// Execute the controller's effects. Transport feedback (sent/failed) is
/// looped straight back into the controller; the dirty elements are
/// collected, deduplicated, and returned for the repaint.
///
/// A failed weather request is logged and dropped — no retry, the next
/// half-hour boundary asks again.
fn execute_effects(
    face: &mut WatchfaceController,
    effects: Vec<Effect>,
    outbox: &mut impl Outbox,
    haptics: &mut impl Haptics,
) -> Vec<Element> {
    let mut dirty = Vec::new();
    let mut queue: VecDeque<Effect> = effects.into();

    while let Some(effect) = queue.pop_front() {
        match effect {
            Effect::MarkDirty(element) => dirty.push(element),
            Effect::RequestWeather => {
                let feedback = match outbox.send(&weather_request()) {
                    Ok(()) => {
                        info!("weather request sent");
                        Event::OutboxSent
                    }
                    Err(err) => {
                        error!("weather request failed: {err}");
                        Event::OutboxFailed(err.to_string())
                    }
                };
                queue.extend(face.update(feedback));
            }
            Effect::DoublePulse => haptics.double_pulse(),
        }
    }

    dirty.sort();
    dirty.dedup();
    dirty
}

#[cfg(test)]
mod tests {
    use super::*;
    use face_companion::Dictionary;
    use face_core::{ClockStyle, FaceError};

    #[derive(Default)]
    struct RecordingOutbox {
        sent: Vec<Dictionary>,
        fail: bool,
    }

    impl Outbox for RecordingOutbox {
        fn send(&mut self, message: &Dictionary) -> Result<()> {
            if self.fail {
                return Err(FaceError::Companion("link down".to_string()));
            }
            self.sent.push(message.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingHaptics {
        pulses: usize,
    }

    impl Haptics for CountingHaptics {
        fn double_pulse(&mut self) {
            self.pulses += 1;
        }
    }

    #[test]
    fn dirty_elements_are_deduplicated() {
        let mut face = WatchfaceController::new(ClockStyle::H24);
        let mut outbox = RecordingOutbox::default();
        let mut haptics = CountingHaptics::default();

        let dirty = execute_effects(
            &mut face,
            vec![
                Effect::MarkDirty(Element::TimeLabel),
                Effect::MarkDirty(Element::TimeLabel),
                Effect::DoublePulse,
            ],
            &mut outbox,
            &mut haptics,
        );

        assert_eq!(dirty, vec![Element::TimeLabel]);
        assert_eq!(haptics.pulses, 1);
    }

    #[test]
    fn weather_request_goes_through_the_outbox() {
        let mut face = WatchfaceController::new(ClockStyle::H24);
        let mut outbox = RecordingOutbox::default();
        let mut haptics = CountingHaptics::default();

        execute_effects(
            &mut face,
            vec![Effect::RequestWeather],
            &mut outbox,
            &mut haptics,
        );

        assert_eq!(outbox.sent.len(), 1);
        assert_eq!(outbox.sent[0], weather_request());
    }

    #[test]
    fn failed_request_is_dropped_without_retry() {
        let mut face = WatchfaceController::new(ClockStyle::H24);
        let mut outbox = RecordingOutbox {
            fail: true,
            ..Default::default()
        };
        let mut haptics = CountingHaptics::default();

        let dirty = execute_effects(
            &mut face,
            vec![Effect::RequestWeather],
            &mut outbox,
            &mut haptics,
        );

        assert!(dirty.is_empty());
        assert!(outbox.sent.is_empty());
    }
}
