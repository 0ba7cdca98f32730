// Domain layer: post models and the port the remote API is reached through.

pub mod model;
pub mod ports;
