use std::io;
use thiserror::Error;

/// Indicates that an input to the assistant could not be understood.
///
/// These are precondition violations: the caller is expected to fix the input
/// and try again, so none of them are recoverable inside the library.
#[derive(Debug, Error)]
pub enum AssistError {
    /// The word did not have exactly five letters.
    #[error("expected a 5-letter word, got \"{0}\"")]
    WordLength(String),

    /// The word contained a character outside a-z/A-Z.
    #[error("word \"{0}\" contains a non-alphabetic character")]
    NonAlphabetic(String),

    /// The feedback string did not have exactly five symbols.
    #[error("expected 5 feedback symbols, got \"{0}\"")]
    FeedbackLength(String),

    /// The feedback string contained a symbol outside the supported alphabet.
    #[error("unrecognized feedback symbol '{0}' (use 'g', 'y' or 'b')")]
    FeedbackSymbol(char),

    /// A line of a precomputed ranking table could not be parsed.
    #[error("malformed ranking line \"{0}\"")]
    RankingLine(String),

    /// Reading from the underlying source failed.
    #[error("failed to read input")]
    Io(#[from] io::Error),
}
