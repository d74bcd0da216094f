// Domain layer: value types and the exercise port. No I/O here.

pub mod model;
pub mod ports;
