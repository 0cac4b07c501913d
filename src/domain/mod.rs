// Domain layer: report model and the ports (interfaces) the core depends on.

pub mod model;
pub mod ports;
