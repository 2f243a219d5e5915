//! Duotrigordle - CLI
//!
//! Play the daily 32-board puzzle in the terminal, or inspect puzzles and scores.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use duotrigordle::{
    commands::{
        PlayConfig, PlayContext, list_targets, prepare_game, run_archive, run_play, score_guess,
        update_settings,
    },
    logging,
    output::{
        print_archive_statistics, print_score_result, print_settings, print_targets_result,
    },
    puzzle::{TargetList, todays_id},
    storage::Storage,
    wordlists::{Dictionary, loader::load_from_file},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "duotrigordle",
    about = "Solve 32 Wordle boards at once with 37 guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Master target list to draw boards from (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Directory for saved games and settings
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a puzzle (default: today's daily puzzle)
    Play {
        /// Puzzle id to play instead of today's; other days are not saved
        #[arg(long, allow_negative_numbers = true)]
        id: Option<i64>,

        /// Play a practice puzzle, which is never saved
        #[arg(short, long)]
        practice: bool,
    },

    /// Print the 32 target words of a puzzle
    Targets {
        /// Puzzle id (default: today's)
        #[arg(long, allow_negative_numbers = true)]
        id: Option<i64>,
    },

    /// Score a guess against one or more target words
    Score {
        /// The guessed word
        guess: String,

        /// Target words to score against
        #[arg(required = true)]
        targets: Vec<String>,
    },

    /// Generate a range of puzzles and report word usage
    Archive {
        /// First puzzle id
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        from: i64,

        /// Last puzzle id (default: today's)
        #[arg(long, allow_negative_numbers = true)]
        to: Option<i64>,

        /// Number of most common words to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Show settings, or change one
    Settings {
        /// Setting name, e.g. colorBlindMode
        key: Option<String>,

        /// New value
        #[arg(requires = "key")]
        value: Option<bool>,
    },
}

/// Load the master target list from the -w flag, checking it can fill every board
fn load_targets(wordlist: Option<&PathBuf>) -> Result<TargetList> {
    let list = match wordlist {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to load word list '{}'", path.display()))?;
            TargetList::new(words)?
        }
        None => TargetList::embedded()?,
    };
    log::debug!("Loaded {} target words", list.len());
    Ok(list)
}

fn open_storage(data_dir: Option<PathBuf>) -> Result<Storage> {
    let dir = data_dir
        .or_else(Storage::default_dir)
        .context("Could not determine a data directory; pass --data-dir")?;
    Ok(Storage::new(dir))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let targets = load_targets(cli.wordlist.as_ref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        id: None,
        practice: false,
    });

    match command {
        Commands::Play { id, practice } => {
            run_play_command(&targets, cli.data_dir, PlayConfig { id, practice })
        }
        Commands::Targets { id } => {
            let result = list_targets(&targets, id.unwrap_or_else(todays_id));
            print_targets_result(&result);
            Ok(())
        }
        Commands::Score { guess, targets } => {
            let result = score_guess(&guess, &targets).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Archive { from, to, top } => {
            let to = to.unwrap_or_else(todays_id);
            println!("Generating puzzles #{from} to #{to}...");
            let stats = run_archive(&targets, from, to, top).map_err(|e| anyhow::anyhow!(e))?;
            print_archive_statistics(&stats);
            Ok(())
        }
        Commands::Settings { key, value } => {
            let storage = open_storage(cli.data_dir)?;
            let change = match (key.as_deref(), value) {
                (Some(key), Some(value)) => Some((key, value)),
                (Some(key), None) => anyhow::bail!("Missing value for setting '{key}'"),
                _ => None,
            };
            let settings = update_settings(&storage, change).map_err(|e| anyhow::anyhow!(e))?;
            print_settings(&settings);
            Ok(())
        }
    }
}

fn run_play_command(
    targets: &TargetList,
    data_dir: Option<PathBuf>,
    config: PlayConfig,
) -> Result<()> {
    let storage = open_storage(data_dir)?;
    let settings = storage.load_settings();

    // A custom target list may hold words the embedded dictionary lacks
    let mut dictionary = Dictionary::embedded();
    dictionary.extend(targets.words().iter().cloned());

    let context = PlayContext {
        targets,
        dictionary: &dictionary,
        storage: &storage,
        settings: &settings,
    };
    let game = prepare_game(&config, &context, todays_id());
    let stdin = std::io::stdin();
    run_play(game, &context, stdin.lock()).map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
