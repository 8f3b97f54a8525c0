//! Application-level configuration.
//!
//! - [`BehaviorConfig`] — fetch timeout for source retrievals
//! - [`QuizConfig`] — mode, category weights and distractor roster

pub mod behavior;
pub mod quiz_config;

pub use behavior::BehaviorConfig;
pub use quiz_config::QuizConfig;
