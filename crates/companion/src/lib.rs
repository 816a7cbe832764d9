//! Key-value message channel to the companion phone app.
//!
//! Messages in both directions are flat dictionaries keyed by small
//! integers, mirroring the transport the watch runtime exposes. This crate
//! owns the key assignments, the wire codec, and the typed view of inbound
//! weather/battery fields.

pub mod codec;
pub mod dict;

pub use codec::{decode_line, encode_line};
pub use dict::{Dictionary, Value};

use face_core::WeatherUpdate;

/// Inbound: temperature in °F (int).
pub const KEY_TEMPERATURE: u32 = 0;
/// Inbound: short conditions text.
pub const KEY_CONDITIONS: u32 = 1;
/// Inbound: phone battery charge percent (int).
pub const KEY_PHONE_BATTERY: u32 = 2;
/// Outbound: weather-request marker. Shares id 0 with the inbound
/// temperature key; the two directions have independent key spaces.
pub const KEY_WEATHER_REQUEST: u32 = 0;

/// Extract the recognized fields from an inbound dictionary.
///
/// Unknown keys are ignored; a key holding the wrong value type reads as
/// absent.
pub fn weather_update(dict: &Dictionary) -> WeatherUpdate {
    WeatherUpdate {
        temperature: dict.int(KEY_TEMPERATURE),
        conditions: dict.text(KEY_CONDITIONS).map(str::to_string),
        phone_battery: dict.int(KEY_PHONE_BATTERY),
    }
}

/// Build the outbound "send me a weather update" message: a single marker
/// field, key 0, value 0.
pub fn weather_request() -> Dictionary {
    let mut dict = Dictionary::new();
    dict.insert_int(KEY_WEATHER_REQUEST, 0);
    dict
}
