use serde::{Deserialize, Serialize};

/// Longest time string the face will display ("HH:MM" plus slack).
pub const TIME_TEXT_MAX: usize = 7;

/// Longest weather string the face will display.
pub const WEATHER_TEXT_MAX: usize = 31;

/// 12-hour vs 24-hour clock display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClockStyle {
    #[default]
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "12h")]
    H12,
}

/// Central display state — every widget reads from this snapshot.
///
/// Mutated only by [`WatchfaceController::update`], one event at a time.
///
/// [`WatchfaceController::update`]: crate::WatchfaceController::update
#[derive(Debug, Clone)]
pub struct DisplayState {
    /// Formatted wall-clock time, at most [`TIME_TEXT_MAX`] chars.
    pub time_text: String,
    /// Formatted weather line, at most [`WEATHER_TEXT_MAX`] chars.
    pub weather_text: String,
    /// Watch battery charge percent as last reported by the host. Not
    /// clamped; the gauge renders whatever was reported.
    pub watch_battery: i32,
    /// Phone battery charge percent from the last companion message.
    /// 0 = unknown (nothing received yet). Not clamped.
    pub phone_battery: i32,
    /// Paired-phone link status.
    pub bluetooth_connected: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            time_text: String::new(),
            weather_text: "Loading...".to_string(),
            watch_battery: 0,
            phone_battery: 0,
            bluetooth_connected: true,
        }
    }
}

/// Truncate `s` in place to at most `max` chars, on a char boundary.
pub(crate) fn truncate_chars(s: &mut String, max: usize) {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_shows_loading_weather() {
        let state = DisplayState::default();
        assert_eq!(state.weather_text, "Loading...");
        assert_eq!(state.phone_battery, 0);
        assert!(state.bluetooth_connected);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let mut s = "überlang".to_string();
        truncate_chars(&mut s, 3);
        assert_eq!(s, "übe");

        let mut short = "ok".to_string();
        truncate_chars(&mut short, 31);
        assert_eq!(short, "ok");
    }
}
