// Domain layer: value types and ports. No storage or UI concerns.

pub mod model;
pub mod ports;
