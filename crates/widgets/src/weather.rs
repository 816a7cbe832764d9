use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use face_core::DisplayState;
use face_theme::FaceStyle;

/// The "<temp>F, <conditions>" line under the clock. Shows "Loading..."
/// until the first complete weather message arrives.
#[derive(Debug, Default)]
pub struct WeatherWidget;

impl WeatherWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn draw<D>(
        &self,
        state: &DisplayState,
        label: Rectangle,
        style: &FaceStyle,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        label
            .into_styled(PrimitiveStyle::with_fill(style.background))
            .draw(target)?;

        let character_style = MonoTextStyle::new(style.weather_font, style.weather_color);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(
            &state.weather_text,
            label.center(),
            character_style,
            text_style,
        )
        .draw(target)?;

        Ok(())
    }
}
