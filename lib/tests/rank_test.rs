#[macro_use]
extern crate assert_matches;

use std::io::Cursor;
use wordle_assist::*;

const TOLERANCE: f64 = 1e-9;

fn word(input: &str) -> Word {
    input.parse().unwrap()
}

fn words(inputs: &[&str]) -> Vec<Word> {
    inputs.iter().map(|input| input.parse().unwrap()).collect()
}

#[test]
fn rank_orders_by_expected_remaining_ascending() {
    // "abase" and "abate" split the set into three singleton patterns, while
    // "aback" cannot tell the other two words apart.
    let candidates = words(&["aback", "abase", "abate"]);

    let ranking = rank_guesses(&candidates);

    assert_eq!(ranking.len(), 3);
    assert_eq!(ranking[0].guess, word("abase"));
    assert_eq!(ranking[1].guess, word("abate"));
    assert_eq!(ranking[2].guess, word("aback"));
    assert!((ranking[0].expected_remaining - 1.0).abs() < TOLERANCE);
    assert!((ranking[1].expected_remaining - 1.0).abs() < TOLERANCE);
    assert!((ranking[2].expected_remaining - 5.0 / 3.0).abs() < TOLERANCE);
}

#[test]
fn equal_scores_fall_back_to_alphabetical_order() {
    // Disjoint letters all around: every guess scores the same.
    let candidates = words(&["klmno", "fghij", "abcde"]);

    let ranking = rank_guesses(&candidates);

    let guesses: Vec<Word> = ranking.iter().map(|entry| entry.guess).collect();
    assert_eq!(guesses, words(&["abcde", "fghij", "klmno"]));
    assert_eq!(
        ranking[0].expected_remaining,
        ranking[2].expected_remaining
    );
}

#[test]
fn rank_is_deterministic_across_runs() {
    let candidates = words(&["alpha", "allot", "begot", "below", "endow", "ingot"]);

    let first = rank_guesses(&candidates);
    let second = rank_guesses(&candidates);

    assert_eq!(first, second);
}

#[test]
fn rank_of_empty_set_is_empty() {
    assert_eq!(rank_guesses(&[]), vec![]);
}

#[test]
fn rank_of_single_word_expects_one_survivor() {
    let ranking = rank_guesses(&words(&["crane"]));

    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].expected_remaining, 1.0);
}

#[test]
fn ranking_from_reader_tolerates_a_header_line() -> Result<(), AssistError> {
    let cursor = Cursor::new(String::from(
        "word,predicted_remaining_words\ncrane,12.5\nabbey , 3\n",
    ));

    let ranking = ranking_from_reader(cursor)?;

    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].guess, word("crane"));
    assert_eq!(ranking[0].expected_remaining, 12.5);
    assert_eq!(ranking[1].guess, word("abbey"));
    assert_eq!(ranking[1].expected_remaining, 3.0);
    Ok(())
}

#[test]
fn ranking_from_reader_keeps_the_given_order() -> Result<(), AssistError> {
    // The table substitutes for a live ranking verbatim; it is not re-sorted.
    let cursor = Cursor::new(String::from("zebra,5.0\napple,9.0\n"));

    let ranking = ranking_from_reader(cursor)?;

    assert_eq!(ranking[0].guess, word("zebra"));
    assert_eq!(ranking[1].guess, word("apple"));
    Ok(())
}

#[test]
fn ranking_from_reader_rejects_malformed_score() {
    let cursor = Cursor::new(String::from("crane,1.5\ntrace,oops\n"));

    assert_matches!(
        ranking_from_reader(cursor),
        Err(AssistError::RankingLine(line)) if line == "trace,oops"
    );
}

#[test]
fn ranking_from_reader_rejects_missing_score() {
    let cursor = Cursor::new(String::from("crane,1.5\ntrace\n"));

    assert_matches!(
        ranking_from_reader(cursor),
        Err(AssistError::RankingLine(line)) if line == "trace"
    );
}

#[test]
fn ranking_from_reader_validates_words() {
    let cursor = Cursor::new(String::from("crane,1.5\nhouses,2.0\n"));

    assert_matches!(
        ranking_from_reader(cursor),
        Err(AssistError::WordLength(bad)) if bad == "houses"
    );
}
