pub mod renderer;

pub use renderer::{FilledRect, Renderer};
