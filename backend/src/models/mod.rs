pub mod parity;

pub use parity::*;
