use std::collections::BTreeSet;

use embedded_graphics::primitives::Rectangle;
use face_core::{DisplayState, Element, Result};
use face_theme::{FaceStyle, Layout};
use face_widgets::{
    BackgroundWidget, BatteryBarWidget, BtIconWidget, TimeWidget, WeatherWidget,
};

use crate::frame::Frame;

/// Paint order, back to front. The time label's clear covers the watch
/// gauge row, so both gauges land after the labels.
const Z_ORDER: [Element; 5] = [
    Element::WeatherLabel,
    Element::TimeLabel,
    Element::WatchBattery,
    Element::PhoneBattery,
    Element::BtIcon,
];

/// Owns the framebuffer and composes the widgets into it.
///
/// `redraw` takes the dirty elements the controller reported and repaints
/// only those, expanding the set to cover overlapping neighbors so a
/// label's clear never leaves a hole in a gauge.
pub struct Scene {
    layout: Layout,
    style: FaceStyle,
    frame: Frame,
    background: BackgroundWidget,
    time: TimeWidget,
    weather: WeatherWidget,
    battery_bar: BatteryBarWidget,
    bt_icon: BtIconWidget,
}

impl Scene {
    pub fn new(layout: Layout, style: FaceStyle) -> Self {
        let frame = Frame::new(layout.bounds);
        Self {
            layout,
            style,
            frame,
            background: BackgroundWidget::new(),
            time: TimeWidget::new(),
            weather: WeatherWidget::new(),
            battery_bar: BatteryBarWidget::new(),
            bt_icon: BtIconWidget::new(),
        }
    }

    /// The composed framebuffer, ready to present.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Repaint everything, backdrop included.
    pub fn redraw_all(&mut self, state: &DisplayState) -> Result<()> {
        self.background
            .draw(self.layout.bounds, &self.style, &mut self.frame)?;
        for element in Z_ORDER {
            self.draw_element(element, state)?;
        }
        Ok(())
    }

    /// Repaint only the dirty elements (plus any their rects overlap).
    pub fn redraw(&mut self, state: &DisplayState, dirty: &[Element]) -> Result<()> {
        let mut pending: BTreeSet<Element> = dirty.iter().copied().collect();

        // Expand to a fixed point: an element whose rect intersects a dirty
        // rect gets cleared by that repaint and must repaint too.
        loop {
            let grown: Vec<Element> = Z_ORDER
                .into_iter()
                .filter(|element| !pending.contains(element))
                .filter(|&element| {
                    pending
                        .iter()
                        .any(|&dirty| overlaps(self.rect_of(element), self.rect_of(dirty)))
                })
                .collect();
            if grown.is_empty() {
                break;
            }
            pending.extend(grown);
        }

        for element in Z_ORDER {
            if pending.contains(&element) {
                self.draw_element(element, state)?;
            }
        }
        Ok(())
    }

    fn rect_of(&self, element: Element) -> Rectangle {
        match element {
            Element::TimeLabel => self.layout.time_label,
            Element::WeatherLabel => self.layout.weather_label,
            Element::WatchBattery => self.layout.watch_battery,
            Element::PhoneBattery => self.layout.phone_battery,
            Element::BtIcon => self.layout.bt_icon,
        }
    }

    fn draw_element(&mut self, element: Element, state: &DisplayState) -> Result<()> {
        match element {
            Element::TimeLabel => {
                self.time
                    .draw(state, self.layout.time_label, &self.style, &mut self.frame)?
            }
            Element::WeatherLabel => self.weather.draw(
                state,
                self.layout.weather_label,
                &self.style,
                &mut self.frame,
            )?,
            Element::WatchBattery => self.battery_bar.draw(
                state.watch_battery,
                self.layout.watch_battery,
                &self.style,
                &mut self.frame,
            )?,
            Element::PhoneBattery => self.battery_bar.draw(
                state.phone_battery,
                self.layout.phone_battery,
                &self.style,
                &mut self.frame,
            )?,
            Element::BtIcon => {
                self.bt_icon
                    .draw(state, self.layout.bt_icon, &self.style, &mut self.frame)?
            }
        }
        Ok(())
    }
}

fn overlaps(a: Rectangle, b: Rectangle) -> bool {
    !a.intersection(&b).is_zero_sized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::BinaryColor;
    use face_theme::Shape;

    fn scene() -> Scene {
        Scene::new(Layout::for_shape(Shape::Rectangular), FaceStyle::default())
    }

    fn state() -> DisplayState {
        DisplayState {
            time_text: "10:30".to_string(),
            weather_text: "23F, Snow".to_string(),
            watch_battery: 57,
            phone_battery: 100,
            bluetooth_connected: true,
        }
    }

    #[test]
    fn watch_gauge_fills_proportionally() {
        let mut scene = scene();
        scene.redraw_all(&state()).unwrap();

        // 115 * 57 / 100 = 65 pixels starting at x = 14.
        assert_eq!(scene.frame().get(14, 53), BinaryColor::On);
        assert_eq!(scene.frame().get(78, 53), BinaryColor::On);
        assert_eq!(scene.frame().get(79, 53), BinaryColor::Off);
    }

    #[test]
    fn overfull_gauge_clips_at_the_display_edge() {
        let mut scene = scene();
        let mut state = state();
        state.phone_battery = 150;
        scene.redraw_all(&state).unwrap();

        assert_eq!(scene.frame().get(143, 112), BinaryColor::On);
        // Nothing beyond the frame, by construction.
        assert_eq!(scene.frame().get(144, 112), BinaryColor::Off);
    }

    #[test]
    fn negative_gauge_draws_no_fill() {
        let mut scene = scene();
        let mut state = state();
        state.phone_battery = -5;
        scene.redraw_all(&state).unwrap();

        let lit = (14..129).any(|x| scene.frame().get(x, 112) == BinaryColor::On);
        assert!(!lit);
    }

    #[test]
    fn disconnect_icon_appears_and_disappears() {
        let mut scene = scene();
        let mut state = state();

        state.bluetooth_connected = false;
        scene.redraw_all(&state).unwrap();
        let lit_disconnected = scene.frame().lit_count();

        state.bluetooth_connected = true;
        scene.redraw(&state, &[Element::BtIcon]).unwrap();
        let lit_connected = scene.frame().lit_count();

        assert!(lit_disconnected > lit_connected);
    }

    #[test]
    fn partial_redraw_leaves_untouched_elements_intact() {
        let mut scene = scene();
        let mut state = state();
        scene.redraw_all(&state).unwrap();

        state.phone_battery = 20;
        scene.redraw(&state, &[Element::PhoneBattery]).unwrap();

        // Watch gauge untouched, phone gauge shortened.
        assert_eq!(scene.frame().get(14, 53), BinaryColor::On);
        assert_eq!(scene.frame().get(14, 112), BinaryColor::On);
        assert_eq!(scene.frame().get(40, 112), BinaryColor::Off);
    }

    #[test]
    fn overlapping_elements_repaint_together() {
        let mut scene = scene();
        let state = state();
        scene.redraw_all(&state).unwrap();

        // The time label's clear covers the watch gauge; redrawing just the
        // label must still leave the gauge filled.
        scene.redraw(&state, &[Element::TimeLabel]).unwrap();
        assert_eq!(scene.frame().get(14, 53), BinaryColor::On);
    }

    #[test]
    fn ascii_preview_shows_content() {
        let mut scene = scene();
        scene.redraw_all(&state()).unwrap();
        assert!(scene.frame().to_ascii().contains('#'));
    }
}
