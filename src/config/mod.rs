//! # Configuration Module
//!
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__, plus DATABASE_URL)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meeting_room_booking::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Connecting to {}", settings.database.url);
//! ```

mod settings;

pub use settings::*;
