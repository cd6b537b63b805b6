//! Controller layer: UI events, drawer editing state, and command orchestration.

pub mod editor;
pub mod events;
pub mod orchestration;
