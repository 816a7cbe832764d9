pub mod layout;
pub mod style;

pub use layout::{Layout, Shape, BAR_HEIGHT, BAR_TRACK_WIDTH};
pub use style::FaceStyle;
