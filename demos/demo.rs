//! End-to-end demo of the question selection engine.
//!
//! Run with: `cargo run --example demo`
//!
//! Walks through the whole flow the quiz web app uses:
//!
//! 1. **Seed a question bank** — one category with questions across all
//!    three difficulties.
//! 2. **Plain selection** — no performance record, uniform sampling.
//! 3. **Adaptive selection** — three player profiles (struggling, average,
//!    strong) with fixed seeds, showing how the difficulty mix shifts.
//! 4. **Grading loop** — grade a submission and feed the resulting
//!    performance record into the next request.
//!
//! ## Key concepts demonstrated
//!
//! - `SelectionRequest::new(category, count)` — minimal constructor;
//!   entropy-seeded, non-adaptive defaults.
//! - `rng_seed: Some(u64)` makes the selection fully deterministic.
//! - `grade_answers` returns a `QuizGrade` whose `performance()` plugs
//!   straight back into the next `SelectionRequest`.

use quiz_select::{
    grade_answers, select_questions, AnswerSubmission, Difficulty, MemoryStore,
    PerformanceRecord, Question, SelectionRequest,
};

const CATEGORY: &str = "64a1f0c2e4b0a1b2c3d4e5f6";

/// A small general-knowledge bank: 6 easy, 6 medium, 6 hard.
fn seed_bank() -> MemoryStore {
    let mut questions = Vec::new();
    let groups: [(Difficulty, &[&str]); 3] = [
        (Difficulty::Easy, &[
            "What color is the sky on a clear day?",
            "How many days are in a week?",
            "What is 2 + 2?",
            "Which animal says 'moo'?",
            "How many legs does a spider have?",
            "What is the first letter of the alphabet?",
        ]),
        (Difficulty::Medium, &[
            "Which planet is known as the Red Planet?",
            "Who wrote 'Romeo and Juliet'?",
            "What is the capital of Australia?",
            "How many continents are there?",
            "What gas do plants absorb from the air?",
            "In which year did World War II end?",
        ]),
        (Difficulty::Hard, &[
            "What is the smallest prime number greater than 100?",
            "Which element has the atomic number 79?",
            "Who developed the theory of general relativity?",
            "What is the longest river in Asia?",
            "Which treaty ended World War I?",
            "What is the speed of light in km/s, to three digits?",
        ]),
    ];
    for (difficulty, texts) in groups {
        for (i, text) in texts.iter().enumerate() {
            questions.push(Question {
                id: format!("{difficulty}-{i}"),
                text: text.to_string(),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                correct_option: i % 4,
                difficulty,
                category: CATEGORY.to_string(),
            });
        }
    }
    MemoryStore::new(questions)
}

fn difficulty_mix(questions: &[Question]) -> String {
    let count_of = |d: Difficulty| questions.iter().filter(|q| q.difficulty == d).count();
    format!(
        "{} easy / {} medium / {} hard",
        count_of(Difficulty::Easy),
        count_of(Difficulty::Medium),
        count_of(Difficulty::Hard),
    )
}

fn print_selection(label: &str, questions: &[Question]) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {label}  —  {}", difficulty_mix(questions));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for q in questions {
        println!("  [{}] {}", q.difficulty, q.text);
    }
    println!();
}

fn main() {
    let store = seed_bank();

    // ── Minimal API ──────────────────────────────────────────────────────────
    // SelectionRequest::new() only needs a category and a count; the seed
    // comes from entropy, so every run differs.
    println!();
    println!("══ Plain selection: SelectionRequest::new() ══");
    println!();
    let picked = select_questions(&store, &SelectionRequest::new(CATEGORY, 5))
        .expect("selection should succeed");
    print_selection("5 random questions, no performance record", &picked);

    // ── Adaptive selection ───────────────────────────────────────────────────
    // Same seed per profile so the output is reproducible. The difficulty
    // mix follows the skill tier inferred from each record.
    println!("══ Adaptive selection: three player profiles (seed=7) ══");
    println!();
    let profiles = [
        ("Struggling (2/10 correct)", PerformanceRecord { correct: 2, total: 10 }),
        ("Average    (6/10 correct)", PerformanceRecord { correct: 6, total: 10 }),
        ("Strong     (9/10 correct)", PerformanceRecord { correct: 9, total: 10 }),
    ];
    for (label, record) in profiles {
        let picked = select_questions(&store, &SelectionRequest {
            category_id: CATEGORY.to_string(),
            count: 10,
            performance: Some(record),
            rng_seed: Some(7),
        })
        .expect("selection should succeed");
        print_selection(label, &picked);
    }

    // ── Grading loop ─────────────────────────────────────────────────────────
    // Grade a submission, then let the resulting performance record drive
    // the next selection.
    println!("══ Grading: submit answers, adapt the next quiz ══");
    println!();
    let quiz = select_questions(&store, &SelectionRequest {
        category_id: CATEGORY.to_string(),
        count: 5,
        performance: None,
        rng_seed: Some(21),
    })
    .expect("selection should succeed");

    // Always answer "A" — some will be right, most won't.
    let submissions: Vec<AnswerSubmission> = quiz
        .iter()
        .map(|q| AnswerSubmission { question_id: q.id.clone(), selected_option: 0 })
        .collect();
    let grade = grade_answers(&quiz, &submissions).expect("grading should succeed");
    println!("  Score: {}/{}", grade.score, grade.total);

    let next = select_questions(&store, &SelectionRequest {
        category_id: CATEGORY.to_string(),
        count: 10,
        performance: Some(grade.performance()),
        rng_seed: Some(22),
    })
    .expect("selection should succeed");
    print_selection("Next quiz, adapted to the graded result", &next);
}
