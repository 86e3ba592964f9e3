//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `create`: Validate and record a new booking
//! - `extend`: Lengthen an existing booking
//! - `check`: Report whether a booking could be created
//! - `list`: List stored bookings
//! - `init`: Initialize the data directory and database

pub mod booking_args;
pub mod check;
pub mod create;
pub mod extend;
pub mod init;
pub mod list;
mod mutation;

pub use booking_args::BookingArgs;
pub use check::CheckCommand;
pub use create::CreateCommand;
pub use extend::ExtendCommand;
pub use init::InitCommand;
pub use list::ListCommand;
