use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use face_core::DisplayState;
use face_theme::FaceStyle;

/// The large "HH:MM" face. Clears its label rect, then draws
/// `state.time_text` centered within it.
#[derive(Debug, Default)]
pub struct TimeWidget;

impl TimeWidget {
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

        let character_style = MonoTextStyle::new(style.time_font, style.time_color);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(&state.time_text, label.center(), character_style, text_style)
            .draw(target)?;

        Ok(())
    }
}
