// Adapters layer: concrete implementations of the domain ports (storage) and
// the inbound HTTP surface.

pub mod http;
pub mod storage;
