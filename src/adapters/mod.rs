// Adapters layer: platform-facing implementations of the domain ports.

pub mod currency;
