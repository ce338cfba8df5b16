//! Application Services
//!
//! - **RoomService**: meeting room creation, lookup, listing and updates
//! - **ReservationService**: reservation creation, updates and room schedules

pub mod reservation_service;
pub mod room_service;

pub use reservation_service::{ReservationService, ReservationServiceImpl};
pub use room_service::{RoomService, RoomServiceImpl};
