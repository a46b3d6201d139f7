//! Wordal - CLI
//!
//! Shareable word-guessing puzzle with TUI and line-based play modes.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordal::{
    commands::{AnswerSource, check_guess, create_link, decode_input, run_simple},
    game::{Game, WordList},
    logging,
    output::{print_check_result, print_link_result},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordal",
    about = "Shareable word-guessing puzzle for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Accepted-guess word list, one word per line (default: accept any word)
    #[arg(short = 'w', long, global = true, env = "WORDAL_WORDS")]
    words: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to a file instead of stderr
    #[arg(long, global = true, env = "WORDAL_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode
    Play(AnswerArgs),

    /// Simple line-based mode (no TUI)
    Simple(AnswerArgs),

    /// Generate a shareable puzzle link for an answer
    Link {
        /// The answer to encode
        answer: String,

        /// Page the link points at
        #[arg(long, env = "WORDAL_BASE_URL", default_value = "https://wordal.app/")]
        base_url: String,
    },

    /// Decode the answer from a token or link
    Decode {
        /// Answer token or full puzzle link
        input: String,
    },

    /// Evaluate one guess against an answer
    Check {
        /// The hidden answer
        answer: String,

        /// The guess to evaluate
        guess: String,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct AnswerArgs {
    /// Answer in plain text
    #[arg(short, long)]
    answer: Option<String>,

    /// Encoded answer token
    #[arg(short, long)]
    token: Option<String>,

    /// Puzzle link carrying the answer
    #[arg(short, long)]
    link: Option<String>,
}

impl AnswerArgs {
    fn source(self) -> Option<AnswerSource> {
        self.answer
            .map(AnswerSource::Plain)
            .or_else(|| self.token.map(AnswerSource::Token))
            .or_else(|| self.link.map(AnswerSource::Link))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Play(args) => run_play_command(args, cli.words.as_deref()),
        Commands::Simple(args) => run_simple_command(args, cli.words.as_deref()),
        Commands::Link { answer, base_url } => run_link_command(&base_url, &answer),
        Commands::Decode { input } => run_decode_command(&input),
        Commands::Check { answer, guess } => run_check_command(&answer, &guess),
    }
}

/// Build a session from the answer arguments and optional word list
fn start_game(args: AnswerArgs, words: Option<&Path>) -> Result<Game> {
    let source = args.source().context("No answer specified")?;
    let answer = source.resolve().context("Cannot start puzzle")?;

    let dictionary = match words {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load word list {}", path.display()))?,
        None => WordList::new(),
    };

    Ok(Game::with_dictionary(answer, dictionary))
}

fn run_play_command(args: AnswerArgs, words: Option<&Path>) -> Result<()> {
    use wordal::interactive::{App, run_tui};

    let game = start_game(args, words)?;
    let app = run_tui(App::new(game))?;

    // Leave the summary on the normal screen after the TUI closes
    if let Some(summary) = app.game.share() {
        println!("{summary}");
    }
    Ok(())
}

fn run_simple_command(args: AnswerArgs, words: Option<&Path>) -> Result<()> {
    let game = start_game(args, words)?;
    run_simple(game)?;
    Ok(())
}

fn run_link_command(base_url: &str, answer: &str) -> Result<()> {
    let result = create_link(base_url, answer).context("Cannot generate link")?;
    print_link_result(&result);
    Ok(())
}

fn run_decode_command(input: &str) -> Result<()> {
    let answer = decode_input(input).context("Cannot decode answer")?;
    println!("{answer}");
    Ok(())
}

fn run_check_command(answer: &str, guess: &str) -> Result<()> {
    let result = check_guess(answer, guess)?;
    print_check_result(&result);
    Ok(())
}
