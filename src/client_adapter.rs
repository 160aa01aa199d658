//! Wire shapes for the quiz web client.
//!
//! Questions sent to a player must not leak the answer key, so the public
//! payload strips `correct_option`. Grading happens server-side against
//! the full records once the player submits, and hands back a
//! [`PerformanceRecord`] the next selection request can adapt to.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::selection_engine::models::{PerformanceRecord, Question};

/// Public view of a question: everything except the answer key.
pub fn to_client_question(question: &Question) -> Value {
    json!({
        "id":         question.id,
        "text":       question.text,
        "options":    question.options,
        "difficulty": question.difficulty,
        "category":   question.category,
    })
}

/// The response body for a quiz request: the selected questions in their
/// final order, answer keys stripped.
pub fn to_quiz_payload(category_id: &str, questions: &[Question]) -> Value {
    let client_questions: Vec<Value> = questions.iter().map(to_client_question).collect();
    json!({
        "category":  category_id,
        "count":     questions.len(),
        "questions": client_questions,
    })
}

// ---------------------------------------------------------------------------
// Answer grading
// ---------------------------------------------------------------------------

/// One answer as submitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub question_id: String,
    pub selected_option: usize,
}

/// Grading verdict for one submitted answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradedAnswer {
    pub question_id: String,
    pub selected_option: usize,
    pub correct_option: usize,
    pub is_correct: bool,
}

/// Result of grading one quiz submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizGrade {
    pub score: u32,
    pub total: u32,
    pub answers: Vec<GradedAnswer>,
}

impl QuizGrade {
    /// The submission summarized as a performance record, ready to feed
    /// into the next adaptive selection request.
    pub fn performance(&self) -> PerformanceRecord {
        PerformanceRecord {
            correct: self.score,
            total: self.total,
        }
    }
}

/// Failures while grading a submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GradeError {
    #[error("unknown question id {0:?} in submission")]
    UnknownQuestion(String),

    #[error("selected option {selected_option} out of range for question {question_id}")]
    OptionOutOfRange {
        question_id: String,
        selected_option: usize,
    },
}

/// Grade a set of submitted answers against the question records.
///
/// Every submission must reference a question in `pool` and select an
/// option that exists on it; otherwise the whole submission is rejected.
pub fn grade_answers(
    pool: &[Question],
    submissions: &[AnswerSubmission],
) -> Result<QuizGrade, GradeError> {
    let mut answers = Vec::with_capacity(submissions.len());
    let mut score = 0u32;

    for sub in submissions {
        let question = pool
            .iter()
            .find(|q| q.id == sub.question_id)
            .ok_or_else(|| GradeError::UnknownQuestion(sub.question_id.clone()))?;

        if sub.selected_option >= question.options.len() {
            return Err(GradeError::OptionOutOfRange {
                question_id: sub.question_id.clone(),
                selected_option: sub.selected_option,
            });
        }

        let is_correct = sub.selected_option == question.correct_option;
        if is_correct {
            score += 1;
        }
        answers.push(GradedAnswer {
            question_id: question.id.clone(),
            selected_option: sub.selected_option,
            correct_option: question.correct_option,
            is_correct,
        });
    }

    Ok(QuizGrade {
        score,
        total: submissions.len() as u32,
        answers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection_engine::models::Difficulty;

    fn question(id: &str, correct_option: usize) -> Question {
        Question {
            id: id.to_string(),
            text: format!("text for {id}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_option,
            difficulty: Difficulty::Medium,
            category: "64a1f0c2e4b0a1b2c3d4e5f6".to_string(),
        }
    }

    fn submission(question_id: &str, selected_option: usize) -> AnswerSubmission {
        AnswerSubmission {
            question_id: question_id.to_string(),
            selected_option,
        }
    }

    #[test]
    fn client_question_does_not_leak_the_answer_key() {
        let payload = to_client_question(&question("q1", 2));
        assert!(payload.get("correct_option").is_none());
        assert_eq!(payload["id"], "q1");
        assert_eq!(payload["difficulty"], "medium");
        assert_eq!(payload["options"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn quiz_payload_reports_count_and_strips_every_question() {
        let pool = vec![question("q1", 0), question("q2", 1)];
        let payload = to_quiz_payload("64a1f0c2e4b0a1b2c3d4e5f6", &pool);
        assert_eq!(payload["count"], 2);
        for q in payload["questions"].as_array().into_iter().flatten() {
            assert!(q.get("correct_option").is_none());
        }
    }

    #[test]
    fn grading_counts_correct_answers_and_summarizes_performance() {
        let pool = vec![question("q1", 0), question("q2", 1), question("q3", 2)];
        let grade = grade_answers(
            &pool,
            &[submission("q1", 0), submission("q2", 3), submission("q3", 2)],
        )
        .expect("grading should succeed");

        assert_eq!(grade.score, 2);
        assert_eq!(grade.total, 3);
        assert_eq!(grade.answers.len(), 3);
        assert!(grade.answers[0].is_correct);
        assert!(!grade.answers[1].is_correct);
        assert_eq!(
            grade.performance(),
            PerformanceRecord { correct: 2, total: 3 }
        );
    }

    #[test]
    fn grading_rejects_unknown_question_ids() {
        let pool = vec![question("q1", 0)];
        let err = grade_answers(&pool, &[submission("ghost", 0)]).unwrap_err();
        assert_eq!(err, GradeError::UnknownQuestion("ghost".to_string()));
    }

    #[test]
    fn grading_rejects_out_of_range_options() {
        let pool = vec![question("q1", 0)];
        let err = grade_answers(&pool, &[submission("q1", 9)]).unwrap_err();
        assert_eq!(
            err,
            GradeError::OptionOutOfRange {
                question_id: "q1".to_string(),
                selected_option: 9,
            }
        );
    }
}
