use crate::selection_engine::models::{PerformanceRecord, SkillTier};

/// Success rate at or above which a player counts as `Hard` tier.
pub const HARD_THRESHOLD: f64 = 0.8;
/// Success rate at or above which a player counts as `Medium` tier.
pub const MEDIUM_THRESHOLD: f64 = 0.5;

/// Classify a player's recent performance into a skill tier.
///
/// No record, or a record with no answered questions, defaults to
/// `Medium`. Both band bounds are inclusive: exactly 80% is `Hard`,
/// exactly 50% is `Medium`.
pub fn evaluate_skill(performance: Option<&PerformanceRecord>) -> SkillTier {
    match performance.and_then(PerformanceRecord::success_rate) {
        None => SkillTier::Medium,
        Some(rate) if rate >= HARD_THRESHOLD => SkillTier::Hard,
        Some(rate) if rate >= MEDIUM_THRESHOLD => SkillTier::Medium,
        Some(_) => SkillTier::Easy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(correct: u32, total: u32) -> PerformanceRecord {
        PerformanceRecord { correct, total }
    }

    #[test]
    fn no_record_defaults_to_medium() {
        assert_eq!(evaluate_skill(None), SkillTier::Medium);
    }

    #[test]
    fn empty_record_defaults_to_medium() {
        assert_eq!(evaluate_skill(Some(&record(0, 0))), SkillTier::Medium);
    }

    #[test]
    fn tiers_match_success_rate_bands() {
        assert_eq!(evaluate_skill(Some(&record(8, 10))), SkillTier::Hard);
        assert_eq!(evaluate_skill(Some(&record(5, 10))), SkillTier::Medium);
        assert_eq!(evaluate_skill(Some(&record(2, 10))), SkillTier::Easy);
        assert_eq!(evaluate_skill(Some(&record(10, 10))), SkillTier::Hard);
        assert_eq!(evaluate_skill(Some(&record(0, 10))), SkillTier::Easy);
    }

    #[test]
    fn band_bounds_are_inclusive() {
        // Exactly 0.8 → hard, exactly 0.5 → medium, just below each bound
        // drops a tier.
        assert_eq!(evaluate_skill(Some(&record(4, 5))), SkillTier::Hard);
        assert_eq!(evaluate_skill(Some(&record(1, 2))), SkillTier::Medium);
        assert_eq!(evaluate_skill(Some(&record(79, 100))), SkillTier::Medium);
        assert_eq!(evaluate_skill(Some(&record(49, 100))), SkillTier::Easy);
    }
}
