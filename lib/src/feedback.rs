use crate::error::AssistError;
use crate::words::{Word, WORD_LEN};
use lazy_static::lazy_static;
use std::fmt;
use std::str::FromStr;

/// The number of distinct feedback patterns: three symbols in five positions.
pub const NUM_PATTERNS: usize = 243;

/// The observation for a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    /// The letter is correct and in the correct position.
    Exact,
    /// The letter is in the word, but somewhere else.
    Present,
    /// The letter is not in the word, beyond what other positions already
    /// account for.
    Absent,
}

/// The feedback for a whole guess: one [`LetterFeedback`] per position.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LEN]);

impl Feedback {
    /// Builds a pattern directly from its five marks.
    pub fn from_marks(marks: [LetterFeedback; WORD_LEN]) -> Feedback {
        Feedback(marks)
    }

    /// The per-position marks.
    pub fn marks(&self) -> &[LetterFeedback; WORD_LEN] {
        &self.0
    }

    /// Returns `true` if every position is marked [`LetterFeedback::Exact`],
    /// i.e. the guess was the answer.
    pub fn is_all_exact(&self) -> bool {
        self.0.iter().all(|mark| *mark == LetterFeedback::Exact)
    }

    /// Computes the feedback the game would return for `guess` if `answer`
    /// were the hidden word.
    ///
    /// Exact matches claim their positions first. The remaining guess letters
    /// are then scanned left to right, and each claims one not-yet-claimed
    /// copy of its letter in the answer if one is left, else it is marked
    /// absent. A letter that appears twice in the guess can therefore come
    /// back with one `Present` and one `Absent` mark when the answer holds
    /// only a single copy.
    pub fn from_guess(guess: &Word, answer: &Word) -> Feedback {
        let guess = guess.letters();
        let answer = answer.letters();

        let mut marks = [LetterFeedback::Absent; WORD_LEN];
        let mut unclaimed = [0u8; 26];
        for index in 0..WORD_LEN {
            if guess[index] == answer[index] {
                marks[index] = LetterFeedback::Exact;
            } else {
                unclaimed[letter_index(answer[index])] += 1;
            }
        }
        for index in 0..WORD_LEN {
            if marks[index] == LetterFeedback::Exact {
                continue;
            }
            let letter = letter_index(guess[index]);
            if unclaimed[letter] > 0 {
                marks[index] = LetterFeedback::Present;
                unclaimed[letter] -= 1;
            }
        }
        Feedback(marks)
    }
}

pub(crate) fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl FromStr for Feedback {
    type Err = AssistError;

    fn from_str(input: &str) -> Result<Feedback, AssistError> {
        if input.chars().count() != WORD_LEN {
            return Err(AssistError::FeedbackLength(input.to_string()));
        }
        let mut marks = [LetterFeedback::Absent; WORD_LEN];
        for (index, symbol) in input.chars().enumerate() {
            marks[index] = match symbol.to_ascii_lowercase() {
                'g' => LetterFeedback::Exact,
                'y' => LetterFeedback::Present,
                'b' | '.' => LetterFeedback::Absent,
                other => return Err(AssistError::FeedbackSymbol(other)),
            };
        }
        Ok(Feedback(marks))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for mark in self.0 {
            let symbol = match mark {
                LetterFeedback::Exact => 'g',
                LetterFeedback::Present => 'y',
                LetterFeedback::Absent => 'b',
            };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Feedback({})", self)
    }
}

lazy_static! {
    static ref ALL_PATTERNS: Vec<Feedback> = {
        let mut patterns = Vec::with_capacity(NUM_PATTERNS);
        for code in 0..NUM_PATTERNS {
            let mut rest = code;
            let mut marks = [LetterFeedback::Absent; WORD_LEN];
            for mark in marks.iter_mut() {
                *mark = match rest % 3 {
                    0 => LetterFeedback::Absent,
                    1 => LetterFeedback::Present,
                    _ => LetterFeedback::Exact,
                };
                rest /= 3;
            }
            patterns.push(Feedback(marks));
        }
        patterns
    };
}

/// Every feedback pattern a guess can be answered with.
///
/// Built once on first use and shared read-only after that. Some entries can
/// never be produced by a real guess/answer pair; filtering by one of them
/// simply leaves nothing.
pub fn all_patterns() -> &'static [Feedback] {
    &ALL_PATTERNS
}
