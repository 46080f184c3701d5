//! Interaction services between the presentation surface and the store.
//!
//! # Responsibility
//! - Map user commands onto repository calls.
//! - Keep UI front-ends decoupled from storage details.

pub mod controller;
pub mod prompt;
