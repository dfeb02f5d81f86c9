// Domain layer: aggregate model, in-memory mutation/query logic and ports.
// No I/O here; adapters implement the ports.

pub mod aggregate;
pub mod model;
pub mod ports;
pub mod stock;
