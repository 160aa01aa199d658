//! # quiz_select
//!
//! The question selection engine of a quiz-game application.
//!
//! Given a category pool, a desired question count, and optionally a
//! player's recent performance, the engine picks a randomized,
//! duplicate-free set of questions, weighted toward a difficulty
//! distribution inferred from the player's skill.
//!
//! ## How it works
//!
//! 1. Build a [`SelectionRequest`] with a category id, a question count,
//!    an optional [`PerformanceRecord`], and an optional RNG seed.
//! 2. Call [`select_questions`] with any [`QuestionStore`] — the engine
//!    validates the request, fetches the category pool, infers the
//!    player's [`SkillTier`], plans a difficulty [`Distribution`], and
//!    draws the right number of questions from each difficulty bucket.
//! 3. The returned questions come back in a final randomized order that
//!    does not reveal their difficulty grouping.
//!
//! Without a performance record the engine falls back to plain uniform
//! sampling over the whole pool.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same selection every time — useful for tests and replays.
//! - **Adaptive**: a recent success rate of 80%+ shifts the mix toward
//!   hard questions, under 50% toward easy ones, with some exposure to
//!   the adjacent difficulty either way.
//! - **Stateless**: every call operates on its own copy of the inputs and
//!   holds nothing between invocations, so concurrent calls need no
//!   coordination.
//!
//! ## Quick start
//!
//! ```rust
//! use quiz_select::{
//!     select_questions, Difficulty, MemoryStore, PerformanceRecord, Question,
//!     SelectionRequest,
//! };
//!
//! let category = "64a1f0c2e4b0a1b2c3d4e5f6";
//! let store = MemoryStore::new((0..10usize).map(|i| Question {
//!     id: format!("q{i}"),
//!     text: format!("Question {i}?"),
//!     options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
//!     correct_option: 0,
//!     difficulty: Difficulty::ALL[i % 3],
//!     category: category.to_string(),
//! }));
//!
//! // Plain random selection:
//! let picked = select_questions(&store, &SelectionRequest::new(category, 5)).unwrap();
//! assert_eq!(picked.len(), 5);
//!
//! // Adaptive selection for a struggling player — deterministic via seed:
//! let picked = select_questions(&store, &SelectionRequest {
//!     category_id: category.to_string(),
//!     count: 5,
//!     performance: Some(PerformanceRecord { correct: 2, total: 10 }),
//!     rng_seed: Some(42),
//! }).unwrap();
//! assert_eq!(picked.len(), 5);
//! ```

pub mod client_adapter;
pub mod selection_engine;

// Convenience re-exports so callers can use `quiz_select::select_questions`
// directly without reaching into `selection_engine::`.
pub use client_adapter::{
    grade_answers, to_client_question, to_quiz_payload, AnswerSubmission, GradeError,
    GradedAnswer, QuizGrade,
};
pub use selection_engine::{
    draw, evaluate_skill, plan_distribution, select_questions, select_weighted, shuffled,
    Difficulty, Distribution, MemoryStore, PerformanceRecord, Question, QuestionStore,
    SelectionError, SelectionRequest, SkillTier,
};
