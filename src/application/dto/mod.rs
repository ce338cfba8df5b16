//! Data Transfer Objects
//!
//! Inbound request shapes and outbound read projections.

pub mod request;
pub mod response;

pub use request::{MeetingRoomUpdateRequest, ReservationCreateRequest, ReservationUpdateRequest};
pub use response::{MeetingRoomDb, ReservationDb, ReservationSummary};
