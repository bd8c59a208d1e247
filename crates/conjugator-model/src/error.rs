use thiserror::Error;

/// Why a single verb produced no words.
///
/// These are recoverable: the batch logs them and moves on to the next verb.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConjugationError {
    #[error("Error conjugating verb \"{verb}\" in language \"{language}\": {reason}")]
    Fetch {
        verb: String,
        language: String,
        reason: String,
    },

    #[error("Error conjugating verb \"{verb}\" in language \"{language}\"")]
    NoWords { verb: String, language: String },
}
