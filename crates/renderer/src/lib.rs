//! Off-screen rendering for the watchface.
//!
//! [`Frame`] is a plain 1-bit framebuffer implementing
//! [`embedded_graphics::draw_target::DrawTarget`]; [`Scene`] composes the
//! widgets into it and supports partial redraws driven by the controller's
//! dirty-element effects.

mod frame;
mod scene;

pub use frame::Frame;
pub use scene::Scene;
