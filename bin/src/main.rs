use clap::Parser;
use rayon::ThreadPool;
use rayon::ThreadPoolBuilder;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::Write;
use wordle_assist::*;

/// Interactive assistant for a five-letter word-guessing game: suggests the
/// most informative guesses and narrows the candidate words after each round
/// of feedback.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains the list of valid words, whitespace
    /// delimited.
    #[clap(short = 'f', long)]
    words_file: String,

    /// Optional path to a precomputed ranking for the opening turn, one
    /// `word,score` pair per line. Saves recomputing the ranking of the full
    /// dictionary, which never changes on turn one.
    #[clap(long)]
    first_ranking: Option<String>,

    /// How many suggestions to display each turn.
    #[clap(short = 'n', long, default_value_t = 10)]
    show: usize,

    /// Number of ranking worker threads. Defaults to one per logical CPU.
    #[clap(long)]
    threads: Option<usize>,

    /// Number of turns before the session ends.
    #[clap(long, default_value_t = 6)]
    turns: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let word_list = WordList::from_reader(words_reader)?;
    println!("There are {} possible words.", word_list.len());

    let precomputed = match &args.first_ranking {
        Some(path) => {
            let reader = io::BufReader::new(File::open(path)?);
            Some(ranking_from_reader(reader)?)
        }
        None => None,
    };

    // The pool lives for the whole session and is released when main returns,
    // on every exit path.
    let mut pool_builder = ThreadPoolBuilder::new();
    if let Some(threads) = args.threads {
        pool_builder = pool_builder.num_threads(threads);
    }
    let pool = pool_builder.build()?;

    run_session(&args, &word_list, precomputed, &pool)
}

fn run_session(
    args: &Args,
    word_list: &WordList,
    mut precomputed: Option<Vec<RankingEntry>>,
    pool: &ThreadPool,
) -> Result<(), Box<dyn Error>> {
    let mut candidates = word_list.words().to_vec();

    for turn in 1..=args.turns {
        // On the first turn a supplied ranking stands in for a live run; the
        // two are interchangeable from here on.
        let ranking = match precomputed.take() {
            Some(ranking) => ranking,
            None => pool.install(|| rank_guesses(&candidates)),
        };
        show_ranking(&ranking, args.show);

        let (guess, feedback) = read_observation()?;
        candidates = filter_candidates(&guess, &feedback, &candidates);

        match assess(&candidates) {
            CandidateStatus::Unique(word) => {
                println!("\n{} is the word!", word);
                return Ok(());
            }
            CandidateStatus::NoMatches => {
                println!("\nNo words match that description!");
                return Ok(());
            }
            CandidateStatus::Open(remaining) => {
                if turn == args.turns {
                    println!("\nNo more turns! {} words were still possible.", remaining);
                }
            }
        }
    }

    Ok(())
}

fn show_ranking(ranking: &[RankingEntry], show: usize) {
    println!("\nRanked Words:");
    for (position, entry) in ranking.iter().take(show).enumerate() {
        println!(
            "{}. {}   {:.3}",
            position + 1,
            entry.guess,
            entry.expected_remaining
        );
    }
}

/// Asks for the guess that was played and the colors it came back with,
/// repeating the prompts until both parse.
fn read_observation() -> Result<(Word, Feedback), Box<dyn Error>> {
    let guess = loop {
        match prompt("\nGuess:  ")?.parse::<Word>() {
            Ok(guess) => break guess,
            Err(err) => println!("{}. Try again.", err),
        }
    };
    let feedback = loop {
        match prompt("Colors: ")?.parse::<Feedback>() {
            Ok(feedback) => break feedback,
            Err(err) => println!("{}. Try again.", err),
        }
    };
    Ok((guess, feedback))
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_string())
}
