pub mod snapshot;
pub mod stock;

pub use snapshot::*;
pub use stock::*;
