#[macro_use]
extern crate assert_matches;

use std::io::Cursor;
use wordle_assist::*;

fn word(input: &str) -> Word {
    input.parse().unwrap()
}

#[test]
fn word_list_from_reader_splits_on_whitespace() -> Result<(), AssistError> {
    let cursor = Cursor::new(String::from("crane trace\nshale\n\nbroad crazy\n"));

    let word_list = WordList::from_reader(cursor)?;

    assert_eq!(
        word_list.words(),
        &[
            word("crane"),
            word("trace"),
            word("shale"),
            word("broad"),
            word("crazy")
        ]
    );
    Ok(())
}

#[test]
fn word_list_from_reader_normalizes_case() -> Result<(), AssistError> {
    let cursor = Cursor::new(String::from("CRANE\nTrace"));

    let word_list = WordList::from_reader(cursor)?;

    assert_eq!(word_list.words(), &[word("crane"), word("trace")]);
    Ok(())
}

#[test]
fn word_list_from_reader_drops_duplicates_keeping_first() -> Result<(), AssistError> {
    let cursor = Cursor::new(String::from("crane\ntrace\nCRANE\n"));

    let word_list = WordList::from_reader(cursor)?;

    assert_eq!(word_list.words(), &[word("crane"), word("trace")]);
    Ok(())
}

#[test]
fn word_list_from_reader_rejects_wrong_length() {
    let cursor = Cursor::new(String::from("crane\nhouses\n"));

    assert_matches!(
        WordList::from_reader(cursor),
        Err(AssistError::WordLength(bad)) if bad == "houses"
    );
}

#[test]
fn word_list_from_reader_rejects_non_alphabetic() {
    let cursor = Cursor::new(String::from("cr4ne"));

    assert_matches!(
        WordList::from_reader(cursor),
        Err(AssistError::NonAlphabetic(bad)) if bad == "cr4ne"
    );
}

#[test]
fn word_list_from_iterator_matches_reader_behavior() -> Result<(), AssistError> {
    let word_list = WordList::from_iterator(vec!["crane", "trace", "crane"])?;

    assert_eq!(word_list.len(), 2);
    assert!(!word_list.is_empty());
    Ok(())
}

#[test]
fn word_parses_and_displays_lower_case() {
    assert_eq!(word("Crane").to_string(), "crane");
}

#[test]
fn word_orders_alphabetically() {
    assert!(word("aback") < word("abase"));
    assert!(word("abase") < word("abate"));
}
