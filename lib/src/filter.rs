use crate::feedback::{letter_index, Feedback, LetterFeedback};
use crate::words::{Word, WORD_LEN};

/// Returns the candidates that are consistent with observing `feedback` after
/// playing `guess`.
///
/// The input set is borrowed and left untouched; the survivors come back as a
/// new, independent vector. An empty result is a legitimate outcome, meaning
/// the observations contradict every remaining word.
pub fn filter_candidates(guess: &Word, feedback: &Feedback, candidates: &[Word]) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| is_consistent(guess, feedback, candidate))
        .copied()
        .collect()
}

/// Counts the candidates consistent with the observation, without collecting
/// them.
pub fn count_consistent(guess: &Word, feedback: &Feedback, candidates: &[Word]) -> usize {
    candidates
        .iter()
        .filter(|candidate| is_consistent(guess, feedback, candidate))
        .count()
}

/// Returns `true` iff `candidate`, were it the hidden answer, would have
/// answered `guess` with exactly `feedback`.
pub fn is_consistent(guess: &Word, feedback: &Feedback, candidate: &Word) -> bool {
    let guess = guess.letters();
    let candidate = candidate.letters();
    let marks = feedback.marks();

    // A position marked exact must hold the guessed letter, and a position
    // marked anything else must not: the game would have marked it exact.
    for index in 0..WORD_LEN {
        let same_letter = guess[index] == candidate[index];
        if (marks[index] == LetterFeedback::Exact) != same_letter {
            return false;
        }
    }

    // The candidate's letters on the non-exact positions are the copies the
    // game hands out when it colors duplicate letters.
    let mut unclaimed = [0u8; 26];
    for index in 0..WORD_LEN {
        if marks[index] != LetterFeedback::Exact {
            unclaimed[letter_index(candidate[index])] += 1;
        }
    }

    // Replay the game's left-to-right assignment: every present mark must
    // claim a remaining copy of its letter, and an absent mark requires that
    // no copy is left to claim. This enforces the per-letter lower bound from
    // the present marks and the upper bound from the absent marks, and rejects
    // mark orderings the game never emits (an absent mark ahead of a present
    // mark of the same letter).
    for index in 0..WORD_LEN {
        let letter = letter_index(guess[index]);
        match marks[index] {
            LetterFeedback::Exact => {}
            LetterFeedback::Present => {
                if unclaimed[letter] == 0 {
                    return false;
                }
                unclaimed[letter] -= 1;
            }
            LetterFeedback::Absent => {
                if unclaimed[letter] > 0 {
                    return false;
                }
            }
        }
    }
    true
}

/// How far the observations so far have narrowed the candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateStatus {
    /// Nothing is consistent with every observation; at least one of them
    /// must have been entered wrong.
    NoMatches,
    /// A single word remains, so it has to be the answer.
    Unique(Word),
    /// More than one word is still in play.
    Open(usize),
}

/// Classifies a candidate set by size, surfacing the terminal states.
///
/// Whether to stop guessing stays with the caller; in particular, running out
/// of turns is the caller's business and is unrelated to set size.
pub fn assess(candidates: &[Word]) -> CandidateStatus {
    match candidates {
        [] => CandidateStatus::NoMatches,
        [only] => CandidateStatus::Unique(*only),
        _ => CandidateStatus::Open(candidates.len()),
    }
}
