//! # Meeting Room Booking
//!
//! Reserve a named meeting room for a time window.
//!
//! ## Architecture
//!
//! - **Domain Layer**: `MeetingRoom` and `Reservation` entities, validated
//!   input shapes, and repository traits
//! - **Application Layer**: validation of untrusted input, DTOs, services
//! - **Infrastructure Layer**: PostgreSQL and in-memory repositories
//!
//! ## Module Structure
//!
//! ```text
//! meeting_room_booking/
//! +-- config/         Configuration management
//! +-- domain/         Entities and repository traits
//! +-- application/    Validation, DTOs and services
//! +-- infrastructure/ Database pool and repositories
//! +-- shared/         Errors and clock
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Validation and services
pub mod application;

// Infrastructure layer - Storage implementations
pub mod infrastructure;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
