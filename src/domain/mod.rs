// Domain layer: form model types and the ports the page talks through.

pub mod model;
pub mod ports;
