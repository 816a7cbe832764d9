use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};
use serde::{Deserialize, Serialize};

/// Battery-bar track width in pixels, shared by both gauges.
pub const BAR_TRACK_WIDTH: u32 = 115;
/// Battery-bar height in pixels.
pub const BAR_HEIGHT: u32 = 2;

/// Physical face shape of the device. Round faces get slightly different
/// element offsets so nothing falls outside the visible circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Rectangular,
    Round,
}

/// Pixel geometry of every visual element, fixed for the lifetime of the
/// face.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Full display size.
    pub bounds: Size,
    pub time_label: Rectangle,
    pub weather_label: Rectangle,
    pub watch_battery: Rectangle,
    pub phone_battery: Rectangle,
    pub bt_icon: Rectangle,
}

impl Layout {
    pub fn for_shape(shape: Shape) -> Self {
        match shape {
            Shape::Rectangular => {
                let bounds = Size::new(144, 168);
                Self {
                    bounds,
                    time_label: Rectangle::new(Point::new(0, 52), Size::new(bounds.width, 50)),
                    weather_label: Rectangle::new(
                        Point::new(0, 120),
                        Size::new(bounds.width, 25),
                    ),
                    watch_battery: Rectangle::new(
                        Point::new(14, 53),
                        Size::new(BAR_TRACK_WIDTH, BAR_HEIGHT),
                    ),
                    phone_battery: Rectangle::new(
                        Point::new(14, 112),
                        Size::new(BAR_TRACK_WIDTH, BAR_HEIGHT),
                    ),
                    bt_icon: Rectangle::new(Point::new(59, 12), Size::new(30, 30)),
                }
            }
            Shape::Round => {
                let bounds = Size::new(180, 180);
                Self {
                    bounds,
                    time_label: Rectangle::new(Point::new(2, 58), Size::new(bounds.width, 50)),
                    weather_label: Rectangle::new(
                        Point::new(0, 125),
                        Size::new(bounds.width, 25),
                    ),
                    watch_battery: Rectangle::new(
                        Point::new(33, 59),
                        Size::new(BAR_TRACK_WIDTH, BAR_HEIGHT),
                    ),
                    phone_battery: Rectangle::new(
                        Point::new(33, 118),
                        Size::new(BAR_TRACK_WIDTH, BAR_HEIGHT),
                    ),
                    bt_icon: Rectangle::new(Point::new(59, 12), Size::new(30, 30)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_use_different_offsets() {
        let rect = Layout::for_shape(Shape::Rectangular);
        let round = Layout::for_shape(Shape::Round);

        assert_ne!(rect.bounds, round.bounds);
        assert_ne!(
            rect.watch_battery.top_left,
            round.watch_battery.top_left
        );
        // The icon sits at the same spot on both shapes.
        assert_eq!(rect.bt_icon, round.bt_icon);
    }

    #[test]
    fn battery_tracks_share_geometry_except_vertical_position() {
        let layout = Layout::for_shape(Shape::Rectangular);
        assert_eq!(layout.watch_battery.size, layout.phone_battery.size);
        assert_eq!(
            layout.watch_battery.top_left.x,
            layout.phone_battery.top_left.x
        );
        assert_ne!(
            layout.watch_battery.top_left.y,
            layout.phone_battery.top_left.y
        );
    }
}
