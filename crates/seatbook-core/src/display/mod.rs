//! Display formatting for seat maps and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrapper types here give context-specific output for seat maps, listings
//! and operation results. Everything renders as markdown for the terminal
//! renderer in the CLI.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers +      │    │   Formatted     │
//! │ (Booking, Seat) │───▶│ Visibility      │───▶│    Output       │
//! │                 │    │ Policy          │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`seat_map`]: role-filtered cabin map ([`SeatMap`])
//! - [`results`]: booking, freeing, recommendation and availability outcomes
//! - [`collections`]: the staff booking listing ([`Bookings`])
//! - [`status`]: one-line status messages ([`OperationStatus`])
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use seatbook_core::display::OperationStatus;
//!
//! let status = OperationStatus::failure("Seat 9Z does not exist");
//! assert_eq!(status.to_string(), "Error: Seat 9Z does not exist\n");
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod seat_map;
pub mod status;

pub use collections::Bookings;
pub use results::{AvailabilityReport, BookingConfirmation, FreedSeat, Recommendation};
pub use seat_map::SeatMap;
pub use status::{OperationStatus, StatusKind};
