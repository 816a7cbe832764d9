use embedded_graphics::{
    geometry::Point,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
};
use face_core::DisplayState;
use face_theme::FaceStyle;

/// Bluetooth-disconnect indicator: hidden while the phone link is up,
/// visible while it is down.
///
/// The glyph is a stroke-drawn Bluetooth rune sized for the 30x30 icon
/// rect.
#[derive(Debug, Default)]
pub struct BtIconWidget;

/// Rune segments as (start, end) offsets within the icon rect.
const RUNE_SEGMENTS: [(Point, Point); 5] = [
    (Point::new(15, 2), Point::new(15, 27)),  // stem
    (Point::new(15, 2), Point::new(23, 9)),   // upper flag
    (Point::new(23, 9), Point::new(7, 20)),   // upper cross
    (Point::new(15, 27), Point::new(23, 20)), // lower flag
    (Point::new(23, 20), Point::new(7, 9)),   // lower cross
];

impl BtIconWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn draw<D>(
        &self,
        state: &DisplayState,
        icon: Rectangle,
        style: &FaceStyle,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        icon.into_styled(PrimitiveStyle::with_fill(style.background))
            .draw(target)?;

        if state.bluetooth_connected {
            return Ok(());
        }

        let stroke = PrimitiveStyle::with_stroke(style.icon_color, 2);
        for (start, end) in RUNE_SEGMENTS {
            Line::new(icon.top_left + start, icon.top_left + end)
                .into_styled(stroke)
                .draw(target)?;
        }

        Ok(())
    }
}
