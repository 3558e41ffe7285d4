#![cfg_attr(feature = "unstable", feature(test))]

mod error;
mod feedback;
mod filter;
mod rank;
mod words;

pub use error::AssistError;
pub use feedback::{all_patterns, Feedback, LetterFeedback, NUM_PATTERNS};
pub use filter::*;
pub use rank::*;
pub use words::{Word, WordList, WORD_LEN};
