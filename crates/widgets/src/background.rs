use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use face_theme::FaceStyle;

/// Paints the face backdrop. Drawn first, below every other element.
#[derive(Debug, Default)]
pub struct BackgroundWidget;

impl BackgroundWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn draw<D>(&self, bounds: Size, style: &FaceStyle, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        Rectangle::new(Point::zero(), bounds)
            .into_styled(PrimitiveStyle::with_fill(style.background))
            .draw(target)
    }
}
