//! Walkthrough of the skill-inference pipeline.
//!
//! Run with: `cargo run --example adaptive`
//!
//! Shows the two pure stages between a performance record and a weighted
//! draw: `evaluate_skill` (record → tier) and `plan_distribution`
//! (tier → difficulty fractions), then the per-bucket draw they feed.

use rand::rngs::StdRng;
use rand::SeedableRng;

use quiz_select::{
    evaluate_skill, plan_distribution, select_weighted, Difficulty, PerformanceRecord,
    Question, SkillTier,
};

fn pool() -> Vec<Question> {
    let mut questions = Vec::new();
    for difficulty in Difficulty::ALL {
        for i in 0..10 {
            questions.push(Question {
                id: format!("{difficulty}-{i}"),
                text: format!("{difficulty} question {i}"),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                correct_option: 0,
                difficulty,
                category: "64a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            });
        }
    }
    questions
}

fn main() {
    // ── Skill evaluation ─────────────────────────────────────────────────────
    println!();
    println!("══ evaluate_skill: performance record → skill tier ══");
    println!();
    let records = [
        (Some(PerformanceRecord { correct: 10, total: 10 }), "10/10"),
        (Some(PerformanceRecord { correct: 8, total: 10 }), " 8/10"),
        (Some(PerformanceRecord { correct: 5, total: 10 }), " 5/10"),
        (Some(PerformanceRecord { correct: 2, total: 10 }), " 2/10"),
        (Some(PerformanceRecord { correct: 0, total: 0 }), " 0/0 "),
        (None, "none "),
    ];
    for (record, label) in records {
        let tier = evaluate_skill(record.as_ref());
        println!("  {label}  →  {tier}");
    }

    // ── Distribution rows ────────────────────────────────────────────────────
    println!();
    println!("══ plan_distribution: skill tier → difficulty fractions ══");
    println!();
    for tier in [SkillTier::Easy, SkillTier::Medium, SkillTier::Hard] {
        let d = plan_distribution(tier);
        println!(
            "  {tier:<6}  →  easy {:.1}  medium {:.1}  hard {:.1}",
            d.easy, d.medium, d.hard
        );
    }

    // ── Weighted draws ───────────────────────────────────────────────────────
    // 10 questions per tier from a balanced pool of 30; same seed so the
    // three draws are comparable.
    println!();
    println!("══ select_weighted: 10 questions per tier (seed=11) ══");
    println!();
    let pool = pool();
    for tier in [SkillTier::Easy, SkillTier::Medium, SkillTier::Hard] {
        let mut rng = StdRng::seed_from_u64(11);
        let picked = select_weighted(&mut rng, &pool, plan_distribution(tier), 10, tier);
        let count_of = |d: Difficulty| picked.iter().filter(|q| q.difficulty == d).count();
        println!(
            "  {tier:<6} player  →  {} easy / {} medium / {} hard",
            count_of(Difficulty::Easy),
            count_of(Difficulty::Medium),
            count_of(Difficulty::Hard),
        );
    }
    println!();
}
