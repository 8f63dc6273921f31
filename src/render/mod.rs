//! Compositing and overlay drawing.

pub mod badge;
pub mod compositor;
pub mod font;

pub use badge::BadgeFont;
pub use compositor::{compose, Composite, Orientation};
pub use font::LabelFont;
