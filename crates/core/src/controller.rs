use chrono::{NaiveDateTime, Timelike};

use crate::event::{Effect, Element, Event, WeatherUpdate};
use crate::state::{truncate_chars, ClockStyle, DisplayState, TIME_TEXT_MAX, WEATHER_TEXT_MAX};

/// Minutes-of-hour multiple at which a weather refresh is requested.
const WEATHER_REQUEST_PERIOD_MIN: u32 = 30;

/// The single event handler of the application.
///
/// Owns [`DisplayState`] and maps each [`Event`] to state mutations plus a
/// list of [`Effect`]s for the runtime to execute. Pure apart from the state
/// it owns: no I/O, no clocks, no drawing, which keeps every behavior
/// directly testable.
#[derive(Debug)]
pub struct WatchfaceController {
    state: DisplayState,
    clock_style: ClockStyle,
}

impl WatchfaceController {
    pub fn new(clock_style: ClockStyle) -> Self {
        Self {
            state: DisplayState::default(),
            clock_style,
        }
    }

    /// Read-only view of the current display state.
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Handle one event. Returns the side effects the runtime must perform.
    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Minute(now) => self.on_minute(now),
            Event::InboxReceived(update) => self.on_inbox(update),
            Event::BatteryChanged(percent) => {
                self.state.watch_battery = i32::from(percent);
                vec![Effect::MarkDirty(Element::WatchBattery)]
            }
            Event::ConnectionChanged(connected) => self.on_connection(connected),
            // Transport notifications carry no display state; the runtime
            // logs them.
            Event::InboxDropped(_)
            | Event::OutboxSent
            | Event::OutboxFailed(_)
            | Event::Shutdown => Vec::new(),
        }
    }

    /// Set the displayed time without the periodic weather side effect.
    ///
    /// Used at startup to seed the clock before the first minute tick;
    /// seeding must never fire a weather request even when it lands on a
    /// half-hour boundary.
    pub fn refresh_time(&mut self, now: NaiveDateTime) -> Vec<Effect> {
        self.state.time_text = format_clock(now, self.clock_style);
        vec![Effect::MarkDirty(Element::TimeLabel)]
    }

    /// Refresh the displayed time; on every 30-minute boundary also ask the
    /// companion for fresh weather.
    fn on_minute(&mut self, now: NaiveDateTime) -> Vec<Effect> {
        let mut effects = self.refresh_time(now);
        if now.minute() % WEATHER_REQUEST_PERIOD_MIN == 0 {
            effects.push(Effect::RequestWeather);
        }
        effects
    }

    /// Apply an inbound companion message field by field.
    ///
    /// The weather line only updates when BOTH temperature and conditions
    /// are present; a partial pair is ignored without touching the previous
    /// text. The phone battery field is independent and unconditional.
    fn on_inbox(&mut self, update: WeatherUpdate) -> Vec<Effect> {
        let mut effects = Vec::new();

        if let (Some(temp), Some(conditions)) = (update.temperature, update.conditions.as_deref())
        {
            self.state.weather_text = compose_weather(temp, conditions);
            effects.push(Effect::MarkDirty(Element::WeatherLabel));
        }

        if let Some(percent) = update.phone_battery {
            self.state.phone_battery = percent;
            effects.push(Effect::MarkDirty(Element::PhoneBattery));
        }

        effects
    }

    /// Icon is hidden while connected. The haptic alert is not
    /// deduplicated: it fires on every notification that reports
    /// disconnected, including a repeat of the current state.
    fn on_connection(&mut self, connected: bool) -> Vec<Effect> {
        self.state.bluetooth_connected = connected;

        let mut effects = vec![Effect::MarkDirty(Element::BtIcon)];
        if !connected {
            effects.push(Effect::DoublePulse);
        }
        effects
    }
}

/// Format a wall-clock time as "HH:MM", zero-padded.
///
/// 24-hour style uses hours 00–23; 12-hour style wraps hour 0 to "12".
pub fn format_clock(time: NaiveDateTime, style: ClockStyle) -> String {
    let mut text = match style {
        ClockStyle::H24 => time.format("%H:%M").to_string(),
        ClockStyle::H12 => time.format("%I:%M").to_string(),
    };
    truncate_chars(&mut text, TIME_TEXT_MAX);
    text
}

/// Compose the weather line `"<temp>F, <conditions>"`, truncated to
/// [`WEATHER_TEXT_MAX`] chars.
pub fn compose_weather(temperature: i32, conditions: &str) -> String {
    let mut text = format!("{temperature}F, {conditions}");
    truncate_chars(&mut text, WEATHER_TEXT_MAX);
    text
}
