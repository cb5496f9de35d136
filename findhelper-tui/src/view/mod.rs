//! View layer: renders the model. Read-only, no state changes.

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
