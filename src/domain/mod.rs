// Domain layer: lesson models, the lesson port, and the container helpers
// the lessons build on.

pub mod containers;
pub mod model;
pub mod ports;
