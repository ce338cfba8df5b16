//! Application Layer
//!
//! Validation of untrusted input, request/response DTOs, and the services
//! that tie validation to the repositories.

pub mod dto;
pub mod services;
pub mod validation;
