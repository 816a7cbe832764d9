use embedded_graphics::{mono_font::MonoFont, pixelcolor::BinaryColor};
use profont::{PROFONT_12_POINT, PROFONT_24_POINT};

/// Monochrome drawing style for the face.
///
/// The display is 1-bit; `On` is the lit foreground, `Off` the dark
/// backdrop. The battery gauge is two-color: a dark track rectangle under
/// a lit fill rectangle.
#[derive(Debug, Clone)]
pub struct FaceStyle {
    pub background: BinaryColor,
    pub time_color: BinaryColor,
    pub weather_color: BinaryColor,
    pub bar_track: BinaryColor,
    pub bar_fill: BinaryColor,
    pub icon_color: BinaryColor,
    pub time_font: &'static MonoFont<'static>,
    pub weather_font: &'static MonoFont<'static>,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            background: BinaryColor::Off,
            time_color: BinaryColor::On,
            weather_color: BinaryColor::On,
            bar_track: BinaryColor::Off,
            bar_fill: BinaryColor::On,
            icon_color: BinaryColor::On,
            time_font: &PROFONT_24_POINT,
            weather_font: &PROFONT_12_POINT,
        }
    }
}
