use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::selection_engine::{
    bucket::select_weighted,
    distribution::plan_distribution,
    error::SelectionError,
    models::{Question, SelectionRequest},
    shuffle,
    skill::evaluate_skill,
    store::QuestionStore,
};

/// A category id must look like a document-store object id: exactly 24
/// hexadecimal characters.
fn validate_category_id(category_id: &str) -> Result<(), SelectionError> {
    let valid = category_id.len() == 24
        && category_id.chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(SelectionError::InvalidCategoryId(category_id.to_string()))
    }
}

/// Select `request.count` random questions from the requested category.
///
/// Validation happens before the store is touched: a malformed category id
/// or a zero count fails fast. An empty pool is `CategoryNotFound`; asking
/// for more questions than the pool holds is `PoolExhausted`.
///
/// With a performance record on the request, the player's skill tier is
/// inferred and the draw weighted toward the matching difficulty
/// distribution. Without one, the whole pool is shuffled and the first
/// `count` taken. Either way the result holds exactly `count` distinct
/// questions in randomized order, and the supplied pool is never mutated.
pub fn select_questions<S: QuestionStore>(
    store: &S,
    request: &SelectionRequest,
) -> Result<Vec<Question>, SelectionError> {
    validate_category_id(&request.category_id)?;
    if request.count == 0 {
        return Err(SelectionError::InvalidCount(request.count));
    }

    let pool = store.fetch_by_category(&request.category_id);
    if pool.is_empty() {
        return Err(SelectionError::CategoryNotFound(request.category_id.clone()));
    }
    if request.count > pool.len() {
        return Err(SelectionError::PoolExhausted {
            requested: request.count,
            available: pool.len(),
        });
    }

    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let picked = match request.performance {
        Some(record) => {
            let tier = evaluate_skill(Some(&record));
            let distribution = plan_distribution(tier);
            debug!(
                "adaptive selection: category={} count={} tier={tier} distribution={distribution:?}",
                request.category_id, request.count
            );
            select_weighted(&mut rng, &pool, distribution, request.count, tier)
        }
        None => {
            debug!(
                "plain selection: category={} count={} pool={}",
                request.category_id,
                request.count,
                pool.len()
            );
            shuffle::draw(&mut rng, &pool, request.count)
        }
    };

    Ok(picked)
}
