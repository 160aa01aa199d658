//! Minimal HTTP wiring for the selection engine.
//!
//! Run with: `cargo run` (from `integration/`), then:
//!
//! ```text
//! curl 'localhost:3000/api/quiz/questions?category_id=64a1f0c2e4b0a1b2c3d4e5f6&count=5'
//! curl 'localhost:3000/api/quiz/questions?category_id=64a1f0c2e4b0a1b2c3d4e5f6&count=10&correct=9&total=10'
//! ```

use log::info;
use quiz_select::{Difficulty, MemoryStore, Question};

mod quiz;

const CATEGORY: &str = "64a1f0c2e4b0a1b2c3d4e5f6";

/// Demo bank: 10 questions per difficulty in one category.
fn seed_bank() -> MemoryStore {
    let mut questions = Vec::new();
    for difficulty in Difficulty::ALL {
        for i in 0..10 {
            questions.push(Question {
                id: format!("{difficulty}-{i}"),
                text: format!("Sample {difficulty} question {i}?"),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                correct_option: i % 4,
                difficulty,
                category: CATEGORY.to_string(),
            });
        }
    }
    MemoryStore::new(questions)
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let bank = quiz::handler::new_bank(seed_bank());
    let app = quiz::routes::router(bank);

    let addr = "127.0.0.1:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    info!("quiz API listening on {addr} (category {CATEGORY})");
    axum::serve(listener, app).await.expect("server error");
}
