//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod load_pools;
pub mod play_quiz;
