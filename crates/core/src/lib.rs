pub mod controller;
pub mod error;
pub mod event;
pub mod state;

pub use controller::WatchfaceController;
pub use error::{FaceError, Result};
pub use event::{Effect, Element, Event, WeatherUpdate};
pub use state::{ClockStyle, DisplayState};
