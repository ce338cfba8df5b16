//! # Domain Entities
//!
//! - **MeetingRoom**: a named, bookable room
//! - **Reservation**: a booking of one room over a time window
//!
//! Each entity module also holds the validated input shapes produced by the
//! validation layer and the repository trait the infrastructure layer
//! implements.

mod meeting_room;
mod reservation;

pub use meeting_room::{MeetingRoom, MeetingRoomCreate, MeetingRoomRepository, MeetingRoomUpdate};
pub use reservation::{Reservation, ReservationCreate, ReservationRepository, ReservationUpdate};

#[cfg(test)]
pub use meeting_room::MockMeetingRoomRepository;
#[cfg(test)]
pub use reservation::MockReservationRepository;
