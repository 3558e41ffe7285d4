use crate::error::AssistError;
use std::collections::HashSet;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

/// The one supported word length.
pub const WORD_LEN: usize = 5;

/// A single five-letter word, stored as lower-case ASCII letter codes.
///
/// A `Word` can only be obtained by parsing, which normalizes the case and
/// rejects anything that is not exactly five ASCII letters. Two words are
/// equal iff their letter sequences are equal, and the derived ordering is
/// the natural alphabetical one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LEN]);

impl Word {
    /// Returns the letters as lower-case ASCII codes, one per position.
    pub fn letters(&self) -> &[u8; WORD_LEN] {
        &self.0
    }
}

impl FromStr for Word {
    type Err = AssistError;

    fn from_str(input: &str) -> Result<Word, AssistError> {
        if input.chars().count() != WORD_LEN {
            return Err(AssistError::WordLength(input.to_string()));
        }
        let mut letters = [0u8; WORD_LEN];
        for (index, letter) in input.chars().enumerate() {
            if !letter.is_ascii_alphabetic() {
                return Err(AssistError::NonAlphabetic(input.to_string()));
            }
            letters[index] = letter.to_ascii_lowercase() as u8;
        }
        Ok(Word(letters))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Word({})", self)
    }
}

/// The dictionary of valid words, used as the initial candidate set.
#[derive(Debug)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Constructs a `WordList` by reading whitespace-delimited words from the
    /// given reader.
    ///
    /// Words are converted to lower case. Duplicates are dropped, keeping the
    /// first occurrence. Any word that is not exactly five letters fails the
    /// whole read.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<WordList, AssistError> {
        let mut words = Vec::new();
        let mut seen = HashSet::new();
        for line in reader.lines() {
            for token in line?.split_whitespace() {
                let word: Word = token.parse()?;
                if seen.insert(word) {
                    words.push(word);
                }
            }
        }
        Ok(WordList { words })
    }

    /// Constructs a `WordList` from anything that iterates over strings.
    ///
    /// Applies the same normalization and deduplication as [`from_reader`].
    ///
    /// [`from_reader`]: WordList::from_reader
    pub fn from_iterator<I, S>(source: I) -> Result<WordList, AssistError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut seen = HashSet::new();
        for token in source {
            let word: Word = token.as_ref().parse()?;
            if seen.insert(word) {
                words.push(word);
            }
        }
        Ok(WordList { words })
    }

    /// The words in first-seen order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
