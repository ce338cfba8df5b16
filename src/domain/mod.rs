//! # Domain Layer
//!
//! Meeting rooms, reservations, and the persistence contracts for them.
//! Independent of any storage engine.

pub mod entities;

pub use entities::*;
