//! Value objects

pub mod claims;

pub use claims::{Claims, Identity, IssuedToken};
