use embedded_graphics::{
    geometry::Size,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use face_theme::FaceStyle;

/// Foreground width in pixels for a charge percent on a track of `track`
/// pixels, with truncating integer division.
///
/// Deliberately NOT clamped: a percent below 0 yields a negative width
/// (nothing is drawn), a percent above 100 yields a bar wider than the
/// track. The host reports 0–100; anything else renders as-is.
pub fn bar_width(track: u32, percent: i32) -> i32 {
    track as i32 * percent / 100
}

/// A two-color horizontal charge gauge: a dark full-width track under a
/// lit fill anchored at the left edge.
///
/// One instance each for the watch and the phone; they share this
/// algorithm with separate state and separate geometry.
#[derive(Debug, Default)]
pub struct BatteryBarWidget;

impl BatteryBarWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn draw<D>(
        &self,
        percent: i32,
        track: Rectangle,
        style: &FaceStyle,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        track
            .into_styled(PrimitiveStyle::with_fill(style.bar_track))
            .draw(target)?;

        let width = bar_width(track.size.width, percent);
        if width > 0 {
            Rectangle::new(track.top_left, Size::new(width as u32, track.size.height))
                .into_styled(PrimitiveStyle::with_fill(style.bar_fill))
                .draw(target)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_proportional_with_truncation() {
        assert_eq!(bar_width(115, 0), 0);
        assert_eq!(bar_width(115, 57), 65); // 115 * 57 / 100 = 65.55 → 65
        assert_eq!(bar_width(115, 100), 115);
        assert_eq!(bar_width(100, 33), 33);
    }

    #[test]
    fn full_charge_fills_track_exactly() {
        for track in [1u32, 2, 100, 115, 144] {
            assert_eq!(bar_width(track, 100), track as i32);
        }
    }

    #[test]
    fn out_of_range_percent_is_not_clamped() {
        assert_eq!(bar_width(115, -5), -5); // -575 / 100, truncating toward zero
        assert_eq!(bar_width(115, 150), 172); // wider than the track
    }

    #[test]
    fn negative_percent_draws_no_fill() {
        use embedded_graphics::{geometry::Point, mock_display::MockDisplay};

        let mut display = MockDisplay::<BinaryColor>::new();
        display.set_allow_overdraw(true);

        let track = Rectangle::new(Point::new(0, 0), Size::new(10, 2));
        BatteryBarWidget::new()
            .draw(-5, track, &FaceStyle::default(), &mut display)
            .unwrap();

        // Track painted dark, no lit fill anywhere.
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(BinaryColor::Off));
        assert_eq!(display.affected_area().size, Size::new(10, 2));
    }

    #[test]
    fn half_charge_fills_left_half() {
        use embedded_graphics::{geometry::Point, mock_display::MockDisplay};

        let mut display = MockDisplay::<BinaryColor>::new();
        display.set_allow_overdraw(true);

        let track = Rectangle::new(Point::new(0, 0), Size::new(10, 2));
        BatteryBarWidget::new()
            .draw(50, track, &FaceStyle::default(), &mut display)
            .unwrap();

        assert_eq!(display.get_pixel(Point::new(4, 0)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(5, 0)), Some(BinaryColor::Off));
    }
}
