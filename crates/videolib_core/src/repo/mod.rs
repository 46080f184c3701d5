//! Repository layer for inventory persistence.
//!
//! # Responsibility
//! - Define the Persistence Store contract used by the controller.
//! - Isolate SQLite statements from interaction logic.
//!
//! # Invariants
//! - Write paths run `VideoRecord::validate()` before SQL mutations.
//! - Every mutation is one statement committed before the call returns.

pub mod video_repo;
