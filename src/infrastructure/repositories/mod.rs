//! Repository Implementations
//!
//! Concrete implementations of the domain repository traits:
//!
//! - **PgMeetingRoomRepository** / **PgReservationRepository**: PostgreSQL via sqlx
//! - **InMemoryRepository**: both traits over a process-local store
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use meeting_room_booking::infrastructure::repositories::{
//!     PgMeetingRoomRepository, PgReservationRepository,
//! };
//!
//! fn setup_repositories(pool: PgPool) {
//!     let rooms = PgMeetingRoomRepository::new(pool.clone());
//!     let reservations = PgReservationRepository::new(pool);
//! }
//! ```

pub mod meeting_room_repository;
pub mod memory;
pub mod reservation_repository;

pub use meeting_room_repository::PgMeetingRoomRepository;
pub use memory::InMemoryRepository;
pub use reservation_repository::PgReservationRepository;
