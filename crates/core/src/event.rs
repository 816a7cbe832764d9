use chrono::NaiveDateTime;

/// All events delivered to the watchface controller.
///
/// Sources:
/// - Minute ticker           → `Minute`
/// - Companion inbox         → `InboxReceived`, `InboxDropped`
/// - Companion outbox        → `OutboxSent`, `OutboxFailed`
/// - Battery service         → `BatteryChanged` (and the startup query)
/// - Connection service      → `ConnectionChanged` (and the startup query)
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Minute boundary reached — carries the current local time.
    Minute(NaiveDateTime),
    /// Companion message decoded successfully.
    InboxReceived(WeatherUpdate),
    /// Companion message could not be decoded — carries the reason.
    InboxDropped(String),
    /// Outbound message acknowledged by the transport.
    OutboxSent,
    /// Outbound message failed to send — carries the reason.
    OutboxFailed(String),
    /// Watch battery level changed (charge percent).
    BatteryChanged(u8),
    /// Paired-phone link went up (`true`) or down (`false`).
    ConnectionChanged(bool),
    /// Graceful shutdown requested.
    Shutdown,
}

/// Fields carried by an inbound companion message. Every field is optional;
/// the sender includes whichever it has.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherUpdate {
    /// Temperature in °F.
    pub temperature: Option<i32>,
    /// Short conditions text, e.g. `"Snow"`.
    pub conditions: Option<String>,
    /// Phone battery charge percent.
    pub phone_battery: Option<i32>,
}

/// Side effects requested by the controller. The runtime executes these
/// against the platform services after each `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A visual element needs redrawing.
    MarkDirty(Element),
    /// Ask the companion app for a fresh weather reading.
    RequestWeather,
    /// Double-pulse haptic alert.
    DoublePulse,
}

/// The individually redrawable visual elements of the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Element {
    TimeLabel,
    WeatherLabel,
    WatchBattery,
    PhoneBattery,
    BtIcon,
}
