use axum::{routing::{get, post}, Router};
use super::handler::{get_questions, submit_quiz, SharedBank};

pub fn router(bank: SharedBank) -> Router {
    Router::new()
        .route("/api/quiz/questions", get(get_questions))
        .route("/api/quiz/submit",    post(submit_quiz))
        .with_state(bank)
}
