use std::convert::Infallible;

use embedded_graphics::{
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    prelude::*,
    Pixel,
};

/// A 1-bit framebuffer the scene draws into.
///
/// Pixels outside the bounds are silently discarded, so drawing an
/// over-full battery bar or text that overhangs the edge clips instead of
/// failing.
#[derive(Debug, Clone)]
pub struct Frame {
    size: Size,
    pixels: Vec<bool>,
}

impl Frame {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![false; (size.width * size.height) as usize],
        }
    }

    /// Color at `(x, y)`. Out-of-bounds coordinates read as unlit.
    pub fn get(&self, x: i32, y: i32) -> BinaryColor {
        if x < 0 || y < 0 || x as u32 >= self.size.width || y as u32 >= self.size.height {
            return BinaryColor::Off;
        }
        if self.pixels[(y as u32 * self.size.width + x as u32) as usize] {
            BinaryColor::On
        } else {
            BinaryColor::Off
        }
    }

    /// Number of lit pixels in the whole frame.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&on| on).count()
    }

    /// Render the frame as text, one character per 2x4 pixel block, for the
    /// console preview. A block with any lit pixel becomes '#'.
    pub fn to_ascii(&self) -> String {
        let cols = self.size.width.div_ceil(2);
        let rows = self.size.height.div_ceil(4);

        let mut out = String::with_capacity((cols as usize + 1) * rows as usize);
        for row in 0..rows {
            for col in 0..cols {
                let lit = (0..4).any(|dy| {
                    (0..2).any(|dx| {
                        self.get((col * 2 + dx) as i32, (row * 4 + dy) as i32) == BinaryColor::On
                    })
                });
                out.push(if lit { '#' } else { ' ' });
            }
            out.push('\n');
        }
        out
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Frame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0
                || point.y < 0
                || point.x as u32 >= self.size.width
                || point.y as u32 >= self.size.height
            {
                continue;
            }
            let index = (point.y as u32 * self.size.width + point.x as u32) as usize;
            self.pixels[index] = color.is_on();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        geometry::Point,
        primitives::{PrimitiveStyle, Rectangle},
    };

    #[test]
    fn starts_unlit() {
        let frame = Frame::new(Size::new(8, 8));
        assert_eq!(frame.lit_count(), 0);
        assert_eq!(frame.get(3, 3), BinaryColor::Off);
    }

    #[test]
    fn out_of_bounds_drawing_clips() {
        let mut frame = Frame::new(Size::new(8, 8));
        Rectangle::new(Point::new(6, 6), Size::new(10, 10))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut frame)
            .unwrap();

        // Only the 2x2 corner inside the frame is lit.
        assert_eq!(frame.lit_count(), 4);
        assert_eq!(frame.get(7, 7), BinaryColor::On);
        assert_eq!(frame.get(8, 8), BinaryColor::Off);
    }

    #[test]
    fn ascii_preview_downsamples_blocks() {
        let mut frame = Frame::new(Size::new(4, 8));
        Rectangle::new(Point::new(0, 0), Size::new(2, 4))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut frame)
            .unwrap();

        assert_eq!(frame.to_ascii(), "# \n  \n");
    }
}
