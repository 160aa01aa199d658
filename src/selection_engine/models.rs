use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Difficulty / skill primitives
// ---------------------------------------------------------------------------

/// Difficulty tag carried by every question in a pool.
///
/// Serializes as the lowercase strings the question store uses
/// (`"easy"`, `"medium"`, `"hard"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulty tiers in canonical order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard   => write!(f, "hard"),
        }
    }
}

/// Coarse classification of a player's demonstrated ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillTier {
    Easy,
    Medium,
    Hard,
}

impl SkillTier {
    /// The difficulty bucket a player of this tier is most comfortable in.
    ///
    /// This is the bucket that absorbs rounding drift when per-bucket
    /// targets are reconciled against the requested count.
    pub fn comfort_difficulty(self) -> Difficulty {
        match self {
            SkillTier::Easy   => Difficulty::Easy,
            SkillTier::Medium => Difficulty::Medium,
            SkillTier::Hard   => Difficulty::Hard,
        }
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillTier::Easy   => write!(f, "easy"),
            SkillTier::Medium => write!(f, "medium"),
            SkillTier::Hard   => write!(f, "hard"),
        }
    }
}

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// One multiple-choice quiz question.
///
/// The engine never mutates a question and never reads `correct_option` —
/// grading belongs to the client adapter. `id` is opaque and unique within
/// a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_option: usize,
    pub difficulty: Difficulty,
    /// Id of the category this question belongs to.
    pub category: String,
}

// ---------------------------------------------------------------------------
// Performance / distribution
// ---------------------------------------------------------------------------

/// Summary of a player's recent answers: how many were correct out of how
/// many answered. `total` may be zero (no history yet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub correct: u32,
    pub total: u32,
}

impl PerformanceRecord {
    /// Fraction of recent answers that were correct, or `None` when the
    /// record is empty (`total == 0`).
    pub fn success_rate(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(f64::from(self.correct) / f64::from(self.total))
        }
    }
}

/// Target fractional split of a quiz across the three difficulty tiers.
///
/// Only ever constructed from the fixed rows in [`plan_distribution`], so
/// the three fractions sum to 1.0 by construction.
///
/// [`plan_distribution`]: crate::selection_engine::plan_distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub easy: f64,
    pub medium: f64,
    pub hard: f64,
}

impl Distribution {
    /// The fraction assigned to one difficulty tier.
    pub fn fraction(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Easy   => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard   => self.hard,
        }
    }
}

// ---------------------------------------------------------------------------
// Selection request
// ---------------------------------------------------------------------------

/// Everything the engine needs for one selection call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// 24-character hex object id of the category to draw from.
    pub category_id: String,
    /// Number of questions to select. Must be at least 1.
    pub count: usize,
    /// Recent performance of the requesting player. When present, the
    /// selection is weighted toward the matching difficulty distribution;
    /// when absent, the whole pool is sampled uniformly.
    pub performance: Option<PerformanceRecord>,
    /// Fixed RNG seed for reproducible selections. `None` seeds from
    /// entropy.
    pub rng_seed: Option<u64>,
}

impl SelectionRequest {
    /// Non-adaptive request with entropy seeding — the common case.
    pub fn new(category_id: impl Into<String>, count: usize) -> Self {
        SelectionRequest {
            category_id: category_id.into(),
            count,
            performance: None,
            rng_seed: None,
        }
    }
}
