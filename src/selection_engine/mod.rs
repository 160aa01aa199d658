//! Core selection engine — randomization, skill inference, and
//! difficulty-weighted question drawing.
//!
//! ## Module overview
//!
//! | Module         | Purpose |
//! |----------------|---------|
//! | `models`       | All shared types: questions, difficulty, performance, request structs |
//! | `store`        | `QuestionStore` provider trait + in-memory implementation |
//! | `shuffle`      | Fisher-Yates shuffle and uniform draw primitives |
//! | `skill`        | Maps a player's recent performance to a skill tier |
//! | `distribution` | Maps a skill tier to a target difficulty distribution |
//! | `bucket`       | Partitions the pool by difficulty and draws per-bucket |
//! | `error`        | `SelectionError` — typed failures for the public API |
//! | `engine`       | Single entry point `select_questions()` — validates and dispatches |

pub mod bucket;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod models;
pub mod shuffle;
pub mod skill;
pub mod store;

// Re-export the public API surface so callers can use
// `selection_engine::select_questions` without reaching into sub-modules.
pub use bucket::select_weighted;
pub use distribution::plan_distribution;
pub use engine::select_questions;
pub use error::SelectionError;
pub use models::{
    Difficulty, Distribution, PerformanceRecord, Question, SelectionRequest, SkillTier,
};
pub use shuffle::{draw, shuffled};
pub use skill::evaluate_skill;
pub use store::{MemoryStore, QuestionStore};
