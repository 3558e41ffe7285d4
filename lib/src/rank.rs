use crate::error::AssistError;
use crate::feedback;
use crate::filter::count_consistent;
use crate::words::Word;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::io::BufRead;

/// A guess together with the number of candidates expected to survive it.
///
/// Lower is better: a low expectation means the guess splits the candidate
/// set evenly across the feedback patterns it can receive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingEntry {
    pub guess: Word,
    pub expected_remaining: f64,
}

/// Scores every candidate as a guess and returns the full ranking, most
/// informative guess first.
///
/// Each guess is evaluated on its own worker against the shared candidate
/// slice and feedback-pattern table; the workers share no mutable state, and
/// the single collect below is the only synchronization point. The final sort
/// makes the order deterministic regardless of which worker finishes first,
/// with equal scores falling back to alphabetical order. A worker that panics
/// unwinds through the collect and aborts the whole pass; no entry is ever
/// silently dropped.
///
/// This is the expensive operation: every guess is checked against all 243
/// patterns and the full candidate set.
pub fn rank_guesses(candidates: &[Word]) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = candidates
        .par_iter()
        .map(|guess| RankingEntry {
            guess: *guess,
            expected_remaining: expected_remaining(guess, candidates),
        })
        .collect();
    entries.sort_by(compare_entries);
    entries
}

fn compare_entries(a: &RankingEntry, b: &RankingEntry) -> Ordering {
    a.expected_remaining
        .total_cmp(&b.expected_remaining)
        .then_with(|| a.guess.cmp(&b.guess))
}

/// The probability-weighted number of candidates left after playing `guess`,
/// where each feedback pattern occurs with probability proportional to the
/// number of candidates that would produce it.
fn expected_remaining(guess: &Word, candidates: &[Word]) -> f64 {
    let total = candidates.len();
    let mut accounted = 0;
    let mut expectation = 0.0;
    for pattern in feedback::all_patterns() {
        let surviving = count_consistent(guess, pattern, candidates);
        accounted += surviving;
        expectation += surviving as f64 * surviving as f64 / total as f64;
    }
    // Every candidate answers a fixed guess with exactly one pattern.
    debug_assert_eq!(accounted, total);
    expectation
}

/// Reads a ranking that was computed ahead of time, e.g. for the opening turn
/// where the candidate set is always the full dictionary.
///
/// Expects one `word,score` pair per line. A leading header line is
/// tolerated. The order of the entries is kept exactly as given, so the
/// result can stand in for a [`rank_guesses`] call without further handling.
pub fn ranking_from_reader<R: BufRead>(reader: R) -> Result<Vec<RankingEntry>, AssistError> {
    let mut entries = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match parse_ranking_line(trimmed) {
            Ok(entry) => entries.push(entry),
            // The first line may be a column header.
            Err(_) if number == 0 => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(entries)
}

fn parse_ranking_line(line: &str) -> Result<RankingEntry, AssistError> {
    let mut fields = line.split(',').map(str::trim);
    let word = fields.next().unwrap_or("");
    let score = fields
        .next()
        .ok_or_else(|| AssistError::RankingLine(line.to_string()))?;
    let guess: Word = word.parse()?;
    let expected_remaining: f64 = score
        .parse()
        .map_err(|_| AssistError::RankingLine(line.to_string()))?;
    Ok(RankingEntry {
        guess,
        expected_remaining,
    })
}

#[cfg(all(feature = "unstable", test))]
mod benches {

    extern crate test;

    use super::*;
    use test::Bencher;

    // A synthetic dictionary big enough to keep the workers busy.
    fn synthetic_words(count: usize) -> Vec<Word> {
        let mut words = Vec::with_capacity(count);
        'outer: for a in b'a'..=b'z' {
            for b in b'a'..=b'z' {
                for c in b'a'..=b'z' {
                    if words.len() == count {
                        break 'outer;
                    }
                    let text: String = [a, b, c, b'e', b's'].iter().map(|l| *l as char).collect();
                    words.push(text.parse().unwrap());
                }
            }
        }
        words
    }

    #[bench]
    fn bench_rank_guesses_500_words(bencher: &mut Bencher) {
        let candidates = synthetic_words(500);

        bencher.iter(|| rank_guesses(&candidates));
    }

    #[bench]
    fn bench_expected_remaining_2000_candidates(bencher: &mut Bencher) {
        let candidates = synthetic_words(2000);
        let guess = candidates[0];

        bencher.iter(|| expected_remaining(&guess, &candidates));
    }
}
