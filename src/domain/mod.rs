// Domain layer: allocation models and ports (interfaces).

pub mod model;
pub mod ports;
