pub mod background;
pub mod battery_bar;
pub mod bt_icon;
pub mod time;
pub mod weather;

pub use background::BackgroundWidget;
pub use battery_bar::{bar_width, BatteryBarWidget};
pub use bt_icon::BtIconWidget;
pub use time::TimeWidget;
pub use weather::WeatherWidget;
