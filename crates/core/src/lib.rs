//! `dashkit-core` — shared building blocks for the dashboard crates.
//!
//! This crate contains **pure** primitives (no storage, no clocks, no IO).

pub mod error;
pub mod id;
pub mod reducer;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::UserId;
pub use reducer::Reducer;
pub use value_object::ValueObject;
