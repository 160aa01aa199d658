use std::collections::HashSet;

use rand::Rng;

use crate::selection_engine::models::{Difficulty, Distribution, Question, SkillTier};
use crate::selection_engine::shuffle;

/// Number of questions to draw from each difficulty bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketTargets {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl BucketTargets {
    pub fn get(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy   => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard   => self.hard,
        }
    }

    fn get_mut(&mut self, difficulty: Difficulty) -> &mut usize {
        match difficulty {
            Difficulty::Easy   => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard   => &mut self.hard,
        }
    }

    pub fn total(&self) -> usize {
        self.easy + self.medium + self.hard
    }
}

/// Compute per-bucket targets for `count` questions under `distribution`.
///
/// Each raw target is `count * fraction` rounded half-up (`f64::round`;
/// all inputs are non-negative). Rounding can leave the three targets
/// summing above or below `count`; the difference is reconciled against
/// the player's own tier bucket, so a medium player's drift lands on the
/// medium target. Excess the tier bucket cannot absorb comes out of the
/// largest remaining target. The returned targets always sum to `count`.
pub fn bucket_targets(distribution: Distribution, count: usize, tier: SkillTier) -> BucketTargets {
    let target = |fraction: f64| (count as f64 * fraction).round() as usize;
    let mut targets = BucketTargets {
        easy:   target(distribution.easy),
        medium: target(distribution.medium),
        hard:   target(distribution.hard),
    };

    let own = tier.comfort_difficulty();
    let total = targets.total();
    if total < count {
        *targets.get_mut(own) += count - total;
    } else if total > count {
        let mut excess = total - count;
        let own_target = targets.get_mut(own);
        let take = excess.min(*own_target);
        *own_target -= take;
        excess -= take;
        while excess > 0 {
            let mut largest = Difficulty::Easy;
            for d in Difficulty::ALL {
                if targets.get(d) > targets.get(largest) {
                    largest = d;
                }
            }
            let t = targets.get_mut(largest);
            if *t == 0 {
                break;
            }
            let take = excess.min(*t);
            *t -= take;
            excess -= take;
        }
    }

    targets
}

/// Draw `count` questions from `pool`, weighted by `distribution`.
///
/// The pool is partitioned into easy/medium/hard buckets, each bucket is
/// shuffled, and its target share drawn. Buckets never cross-draw from
/// each other; instead, when a bucket runs short, the shortfall is made
/// up afterwards with a uniform draw over the questions not yet selected.
/// Callers that cap `count` at the pool size therefore always get exactly
/// `count` distinct questions. A final shuffle hides the difficulty
/// grouping of the draw order.
pub fn select_weighted<R: Rng>(
    rng: &mut R,
    pool: &[Question],
    distribution: Distribution,
    count: usize,
    tier: SkillTier,
) -> Vec<Question> {
    let targets = bucket_targets(distribution, count, tier);

    let mut picked: Vec<Question> = Vec::with_capacity(count);
    for difficulty in Difficulty::ALL {
        let bucket: Vec<Question> = pool
            .iter()
            .filter(|q| q.difficulty == difficulty)
            .cloned()
            .collect();
        picked.extend(shuffle::draw(rng, &bucket, targets.get(difficulty)));
    }

    if picked.len() < count {
        let shortfall = count - picked.len();
        let leftover: Vec<Question> = {
            let chosen: HashSet<&str> = picked.iter().map(|q| q.id.as_str()).collect();
            pool.iter()
                .filter(|q| !chosen.contains(q.id.as_str()))
                .cloned()
                .collect()
        };
        picked.extend(shuffle::draw(rng, &leftover, shortfall));
    }

    shuffle::shuffled(rng, &picked)
}
