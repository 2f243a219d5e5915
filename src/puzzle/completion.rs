//! Completion check
//!
//! A puzzle is won once every target has been entered verbatim as a guess.

/// Check if every target word has been guessed
///
/// Order does not matter and comparison is exact, so callers must normalize case
/// first. Fewer guesses than targets can never cover them all.
///
/// # Examples
/// ```
/// use duotrigordle::puzzle::all_targets_guessed;
///
/// assert!(all_targets_guessed(&["SLATE", "CRANE"], &["CRANE", "SLATE"]));
/// assert!(!all_targets_guessed(&["CRANE"], &["CRANE", "SLATE"]));
/// ```
#[must_use]
pub fn all_targets_guessed<G, T>(guesses: &[G], targets: &[T]) -> bool
where
    G: AsRef<str>,
    T: AsRef<str>,
{
    if guesses.len() < targets.len() {
        return false;
    }
    targets
        .iter()
        .all(|target| guesses.iter().any(|guess| guess.as_ref() == target.as_ref()))
}
