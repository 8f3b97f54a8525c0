//! Quiz mechanics: pools, question selection, distractors and scoring.
//!
//! ```text
//! PoolSet ──pick_kind(mode)──▶ CategoryPool::draw ──▶ QuestionItem
//!                                                        │
//!                          Roster ──generate_choices─────┤
//!                                                        ▼
//!                               SessionState::begin_question / evaluate
//! ```

pub mod choices;
pub mod mode;
pub mod pool;
pub mod roster;
pub mod selector;
pub mod session;
