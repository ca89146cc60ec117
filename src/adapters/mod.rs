// Adapters layer: concrete presentations of a report (plain text, JSON).

pub mod render;

pub use render::{renderer_for, JsonRenderer, TextRenderer};
