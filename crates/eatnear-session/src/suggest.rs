//! Random restaurant suggestion.

use eatnear_core::SearchResult;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::SessionError;

/// Picks one result uniformly at random.
///
/// # Errors
///
/// Returns [`SessionError::NoCandidates`] when `results` is empty.
pub fn pick_random<'a, R>(
    results: &'a [SearchResult],
    rng: &mut R,
) -> Result<&'a SearchResult, SessionError>
where
    R: Rng + ?Sized,
{
    results.choose(rng).ok_or(SessionError::NoCandidates)
}
