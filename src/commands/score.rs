//! Score command
//!
//! Scores a guess against one or more target words.

use crate::core::{ColorCode, Word};

/// Colors of one guess against each target
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: String,
    pub rows: Vec<(String, ColorCode)>,
}

/// Score `guess` against every target
///
/// # Errors
///
/// Returns an error if the guess or any target is not a five-letter word.
pub fn score_guess(guess: &str, targets: &[String]) -> Result<ScoreResult, String> {
    let guess_word = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let rows = targets
        .iter()
        .map(|target| {
            let target_word =
                Word::new(target.as_str()).map_err(|e| format!("Invalid target '{target}': {e}"))?;
            let code = ColorCode::calculate(&guess_word, &target_word);
            Ok((target_word.text().to_string(), code))
        })
        .collect::<Result<Vec<_>, String>>()?;

    Ok(ScoreResult {
        guess: guess_word.text().to_string(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_each_target() {
        let result = score_guess("xycez", &["ABCDE".to_string(), "XYCEZ".to_string()]).unwrap();

        assert_eq!(result.guess, "XYCEZ");
        assert_eq!(result.rows[0].0, "ABCDE");
        assert_eq!(result.rows[0].1.to_string(), "BBGYB");
        assert!(result.rows[1].1.is_solved());
    }

    #[test]
    fn invalid_guess_returns_error() {
        assert!(score_guess("abc", &["ABCDE".to_string()]).is_err());
    }

    #[test]
    fn invalid_target_returns_error() {
        let err = score_guess("CRANE", &["TOOLONG".to_string()]).unwrap_err();
        assert!(err.contains("TOOLONG"));
    }
}
