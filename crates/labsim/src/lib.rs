//! Application layer for the virtual lab engine
//!
//! `labsim_core` is clock-free and I/O-free; this crate supplies the pieces
//! a front-end needs around it:
//! - Wall-clock session driver (countdown ticks and accumulation deltas
//!   from a background thread, with clean teardown)
//! - CSV export of recorded observations, written atomically
//! - Manual-entry parsing (the numeric guard the recorder itself omits)
//! - Logging setup

// ============================================================================
// Core modules
// ============================================================================

pub mod driver;
pub mod entry;
pub mod export;
pub mod logging;
pub mod util;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use driver::{DriverEvent, SessionDriver};
pub use entry::parse_manual_entry;
pub use export::{csv_document, write_csv};
