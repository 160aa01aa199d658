use std::collections::HashMap;

use crate::selection_engine::models::Question;

/// Source of question pools, injected into the engine by the caller.
///
/// The persistence layer owns the real implementation; the engine only
/// ever asks for the full pool of one category and works on the returned
/// copy.
pub trait QuestionStore {
    /// All questions belonging to `category_id`. Unknown categories
    /// return an empty pool.
    fn fetch_by_category(&self, category_id: &str) -> Vec<Question>;
}

/// In-memory question bank keyed by category id.
///
/// Backs the tests, demos, and the integration sample. Not intended as a
/// production store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    by_category: HashMap<String, Vec<Question>>,
}

impl MemoryStore {
    /// Build a bank from any iterator of questions, grouping by category.
    pub fn new(questions: impl IntoIterator<Item = Question>) -> Self {
        let mut by_category: HashMap<String, Vec<Question>> = HashMap::new();
        for q in questions {
            by_category.entry(q.category.clone()).or_default().push(q);
        }
        MemoryStore { by_category }
    }

    /// Add one question to the bank.
    pub fn insert(&mut self, question: Question) {
        self.by_category
            .entry(question.category.clone())
            .or_default()
            .push(question);
    }

    /// Look up a question by id across all categories. Used by grading
    /// surfaces, which receive question ids back from the client.
    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.by_category
            .values()
            .flat_map(|pool| pool.iter())
            .find(|q| q.id == question_id)
    }

    /// Total number of questions across all categories.
    pub fn len(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QuestionStore for MemoryStore {
    fn fetch_by_category(&self, category_id: &str) -> Vec<Question> {
        self.by_category
            .get(category_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection_engine::models::Difficulty;

    fn question(id: &str, category: &str) -> Question {
        Question {
            id: id.to_string(),
            text: format!("text for {id}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_option: 0,
            difficulty: Difficulty::Medium,
            category: category.to_string(),
        }
    }

    #[test]
    fn fetch_returns_only_the_requested_category() {
        let store = MemoryStore::new(vec![
            question("q1", "cat-a"),
            question("q2", "cat-a"),
            question("q3", "cat-b"),
        ]);

        let pool = store.fetch_by_category("cat-a");
        assert_eq!(pool.len(), 2);
        assert!(pool.iter().all(|q| q.category == "cat-a"));
    }

    #[test]
    fn unknown_category_yields_empty_pool() {
        let store = MemoryStore::new(vec![question("q1", "cat-a")]);
        assert!(store.fetch_by_category("missing").is_empty());
    }

    #[test]
    fn get_finds_questions_across_categories() {
        let store = MemoryStore::new(vec![question("q1", "cat-a"), question("q2", "cat-b")]);
        assert_eq!(store.get("q2").map(|q| q.category.as_str()), Some("cat-b"));
        assert!(store.get("nope").is_none());
    }
}
