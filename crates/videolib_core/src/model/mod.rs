//! Domain model for the video rental inventory.
//!
//! # Responsibility
//! - Define the single inventory record and its availability status.
//!
//! # Invariants
//! - Every record is identified by a caller-chosen, unique `video_id`.
//! - Issuer card id carries the `N/A` sentinel whenever a video is available.

pub mod video;
