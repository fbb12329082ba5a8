// Domain layer: listing models and ports. No HTTP or HTML types in here.

pub mod model;
pub mod ports;
