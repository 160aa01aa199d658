use crate::selection_engine::models::{Distribution, SkillTier};

/// Target difficulty distribution for a skill tier.
///
/// Pure lookup with three fixed rows. Each row biases the mix toward the
/// player's comfort zone while keeping some exposure to the adjacent
/// difficulty; each row sums to exactly 1.0.
pub fn plan_distribution(tier: SkillTier) -> Distribution {
    match tier {
        SkillTier::Easy   => Distribution { easy: 0.7, medium: 0.3, hard: 0.0 },
        SkillTier::Medium => Distribution { easy: 0.2, medium: 0.6, hard: 0.2 },
        SkillTier::Hard   => Distribution { easy: 0.0, medium: 0.3, hard: 0.7 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection_engine::models::Difficulty;

    #[test]
    fn every_row_sums_to_one() {
        for tier in [SkillTier::Easy, SkillTier::Medium, SkillTier::Hard] {
            let d = plan_distribution(tier);
            let sum = d.easy + d.medium + d.hard;
            assert!(
                (sum - 1.0).abs() < f64::EPSILON,
                "distribution for {tier} sums to {sum}"
            );
        }
    }

    #[test]
    fn rows_favor_the_matching_difficulty() {
        assert_eq!(plan_distribution(SkillTier::Easy).easy, 0.7);
        assert_eq!(plan_distribution(SkillTier::Medium).medium, 0.6);
        assert_eq!(plan_distribution(SkillTier::Hard).hard, 0.7);
    }

    #[test]
    fn fraction_reads_the_matching_field() {
        let d = plan_distribution(SkillTier::Medium);
        assert_eq!(d.fraction(Difficulty::Easy), d.easy);
        assert_eq!(d.fraction(Difficulty::Medium), d.medium);
        assert_eq!(d.fraction(Difficulty::Hard), d.hard);
    }
}
