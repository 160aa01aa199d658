use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use quiz_select::{
    grade_answers, select_questions, to_quiz_payload, AnswerSubmission, MemoryStore,
    PerformanceRecord, QuestionStore, SelectionError, SelectionRequest,
};
use serde::Deserialize;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Shared state: the in-memory question bank
// ---------------------------------------------------------------------------

pub type SharedBank = Arc<MemoryStore>;

pub fn new_bank(store: MemoryStore) -> SharedBank {
    Arc::new(store)
}

// ---------------------------------------------------------------------------
// Query / body types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct QuizQuery {
    pub category_id: String,
    pub count: usize,
    /// Recent correct-answer count; only used together with `total`.
    pub correct: Option<u32>,
    /// Recent answered-question count; only used together with `correct`.
    pub total: Option<u32>,
}

#[derive(Deserialize)]
pub struct SubmitRequest {
    pub category_id: String,
    pub answers: Vec<AnswerSubmission>,
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

fn to_http_error(err: SelectionError) -> (StatusCode, Json<Value>) {
    let status = match err {
        SelectionError::InvalidCategoryId(_) | SelectionError::InvalidCount(_) => {
            StatusCode::BAD_REQUEST
        }
        SelectionError::CategoryNotFound(_) => StatusCode::NOT_FOUND,
        SelectionError::PoolExhausted { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status, Json(json!({ "error": err.to_string() })))
}

// ---------------------------------------------------------------------------
// GET /api/quiz/questions?category_id=...&count=...[&correct=..&total=..]
// ---------------------------------------------------------------------------

pub async fn get_questions(
    State(bank): State<SharedBank>,
    Query(params): Query<QuizQuery>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let performance = match (params.correct, params.total) {
        (Some(correct), Some(total)) => Some(PerformanceRecord { correct, total }),
        _ => None,
    };

    let request = SelectionRequest {
        category_id: params.category_id.clone(),
        count: params.count,
        performance,
        rng_seed: None,
    };

    let picked = select_questions(bank.as_ref(), &request).map_err(to_http_error)?;

    // Answer keys never reach the client.
    Ok(Json(to_quiz_payload(&params.category_id, &picked)))
}

// ---------------------------------------------------------------------------
// POST /api/quiz/submit   body: { category_id, answers: [...] }
// ---------------------------------------------------------------------------

pub async fn submit_quiz(
    State(bank): State<SharedBank>,
    Json(body): Json<SubmitRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let pool = bank.fetch_by_category(&body.category_id);
    if pool.is_empty() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("no questions found for category {}", body.category_id) })),
        ));
    }

    let grade = grade_answers(&pool, &body.answers).map_err(|err| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        )
    })?;

    let performance = grade.performance();
    Ok(Json(json!({
        "score":       grade.score,
        "total":       grade.total,
        "answers":     grade.answers,
        "performance": performance,
    })))
}
