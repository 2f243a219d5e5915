//! Play command
//!
//! Line-oriented game loop: each line is a guess or a command. Daily games are
//! saved after every accepted guess.

use crate::output::display::{print_board, print_game_summary, print_overview};
use crate::puzzle::{GameState, NUM_BOARDS, NUM_GUESSES, TargetList, now_millis, practice_id};
use crate::storage::{Settings, Storage};
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Which puzzle to play
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Puzzle id; today's puzzle when absent. Other days are never saved.
    pub id: Option<i64>,
    pub practice: bool,
}

/// Everything a game needs besides its own state
pub struct PlayContext<'a> {
    pub targets: &'a TargetList,
    pub dictionary: &'a Dictionary,
    pub storage: &'a Storage,
    pub settings: &'a Settings,
}

enum Command {
    Quit,
    Help,
    Overview,
    Board(usize),
    Guess(String),
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let mut parts = line.split_whitespace();
    match parts.next()?.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Some(Command::Quit),
        "help" | "?" => Some(Command::Help),
        "boards" | "b" => Some(Command::Overview),
        // BOARD is also a valid guess, so only treat it as a command with a number
        "board" => match parts.next().map(str::parse::<usize>) {
            Some(Ok(n)) if (1..=NUM_BOARDS).contains(&n) => Some(Command::Board(n - 1)),
            Some(_) => None,
            None => Some(Command::Guess(line.to_string())),
        },
        _ => Some(Command::Guess(line.to_string())),
    }
}

fn print_help() {
    println!("Type a five-letter word to guess it on every board.");
    println!("Commands: 'boards' overview, 'board N' to inspect one board, 'quit' to exit\n");
}

/// Set up the game for a config: resume today's saved game, or start fresh
///
/// Only today's puzzle is saved. Any other id is played as an unsaved practice
/// game so it cannot replace today's progress.
#[must_use]
pub fn prepare_game(config: &PlayConfig, context: &PlayContext<'_>, todays_id: i64) -> GameState {
    let now = now_millis();
    if config.practice {
        let id = config.id.unwrap_or_else(practice_id);
        return GameState::start(id, true, context.targets, now);
    }
    match config.id {
        Some(id) if id != todays_id => {
            log::info!("Puzzle {id} is not today's puzzle, playing it unsaved");
            GameState::start(id, true, context.targets, now)
        }
        _ => context.storage.load_game(todays_id, context.targets, now),
    }
}

/// Run the interactive game loop until the game ends or the player quits
///
/// # Errors
///
/// Returns an error if reading input fails.
pub fn run_play<R: BufRead>(
    mut game: GameState,
    context: &PlayContext<'_>,
    mut reader: R,
) -> Result<GameState, String> {
    let kind = if game.practice { "Practice" } else { "Daily" };
    println!(
        "\n{} {}",
        format!("{kind} Duotrigordle").bright_cyan().bold(),
        format!("#{}", game.id).bright_yellow()
    );
    print_help();
    print_overview(&game, context.settings);

    while !game.game_over {
        print!("Guess {}/{}: ", game.guesses.len() + 1, NUM_GUESSES);
        std::io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        if reader.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
            println!();
            break;
        }

        match parse_command(&line) {
            None => println!("Type a guess, or 'board N' with N from 1 to {NUM_BOARDS}"),
            Some(Command::Quit) => break,
            Some(Command::Help) => print_help(),
            Some(Command::Overview) => print_overview(&game, context.settings),
            Some(Command::Board(board)) => print_board(&game, board, context.settings),
            Some(Command::Guess(text)) => {
                match game.submit_word(&text, context.dictionary, now_millis()) {
                    Ok(outcome) => {
                        for board in &outcome.solved_boards {
                            println!(
                                "{}",
                                format!("Solved board {}: {}", board + 1, game.targets[*board])
                                    .green()
                            );
                        }
                        if let Err(e) = context.storage.save_game(&game) {
                            log::warn!("Could not save game: {e}");
                        }
                        print_overview(&game, context.settings);
                    }
                    Err(e) => println!("{}", format!("❌ {e}").red()),
                }
            }
        }
    }

    if game.game_over {
        print_game_summary(&game, now_millis());
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    struct Fixture {
        // Removed with its contents when the fixture drops
        _dir: TempDir,
        targets: TargetList,
        dictionary: Dictionary,
        storage: Storage,
        settings: Settings,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let storage = Storage::new(dir.path());
            Self {
                _dir: dir,
                targets: TargetList::embedded().unwrap(),
                dictionary: Dictionary::embedded(),
                storage,
                settings: Settings::default(),
            }
        }

        fn context(&self) -> PlayContext<'_> {
            PlayContext {
                targets: &self.targets,
                dictionary: &self.dictionary,
                storage: &self.storage,
                settings: &self.settings,
            }
        }
    }

    fn guess_texts(game: &GameState) -> Vec<&str> {
        game.guesses.iter().map(crate::core::Word::text).collect()
    }

    #[test]
    fn parse_commands() {
        assert!(matches!(parse_command("  QUIT "), Some(Command::Quit)));
        assert!(matches!(parse_command("board 32"), Some(Command::Board(31))));
        assert!(parse_command("board 33").is_none());
        assert!(matches!(parse_command("board"), Some(Command::Guess(g)) if g == "board"));
        assert!(parse_command("   ").is_none());
        assert!(matches!(parse_command("crane"), Some(Command::Guess(g)) if g == "crane"));
    }

    #[test]
    fn guesses_are_recorded_and_saved() {
        let fixture = Fixture::new();
        let context = fixture.context();
        let game = GameState::start(77, false, &fixture.targets, 0);
        let input = "crane\nxqzvj\nboard 1\nboards\nslate\nquit\n";

        let game = run_play(game, &context, Cursor::new(input)).unwrap();

        assert_eq!(guess_texts(&game), ["CRANE", "SLATE"]);
        assert_eq!(fixture.storage.load_game(77, &fixture.targets, 1), game);
    }

    #[test]
    fn playing_every_target_ends_the_game() {
        let fixture = Fixture::new();
        let context = fixture.context();
        let game = GameState::start(78, true, &fixture.targets, 0);
        let input: String = game
            .targets
            .iter()
            .map(|t| format!("{}\n", t.text().to_lowercase()))
            .collect();

        let game = run_play(game, &context, Cursor::new(input)).unwrap();

        assert!(game.is_won());
        assert_eq!(fixture.storage.read(crate::storage::GAME_KEY).unwrap(), None);
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let fixture = Fixture::new();
        let context = fixture.context();
        let game = GameState::start(79, true, &fixture.targets, 0);
        let game = run_play(game, &context, Cursor::new("")).unwrap();
        assert!(game.guesses.is_empty());
    }

    #[test]
    fn practice_config_starts_unsaved_game() {
        let fixture = Fixture::new();
        let context = fixture.context();
        let config = PlayConfig {
            id: Some(5),
            practice: true,
        };
        let game = prepare_game(&config, &context, 100);
        assert!(game.practice);
        assert_eq!(game.id, 5);

        let daily = prepare_game(&PlayConfig::default(), &context, 100);
        assert!(!daily.practice);
        assert_eq!(daily.id, 100);
    }

    #[test]
    fn replaying_another_day_keeps_todays_progress() {
        let fixture = Fixture::new();
        let context = fixture.context();

        let daily = prepare_game(&PlayConfig::default(), &context, 500);
        let daily = run_play(daily, &context, Cursor::new("crane\nslate\nquit\n")).unwrap();
        assert_eq!(guess_texts(&daily), ["CRANE", "SLATE"]);

        let replay_config = PlayConfig {
            id: Some(5),
            practice: false,
        };
        let replay = prepare_game(&replay_config, &context, 500);
        assert_eq!(replay.id, 5);
        assert!(replay.practice);
        let replay = run_play(replay, &context, Cursor::new("crane\nquit\n")).unwrap();
        assert_eq!(replay.guesses.len(), 1);

        let resumed = prepare_game(&PlayConfig::default(), &context, 500);
        assert_eq!(resumed.id, 500);
        assert_eq!(guess_texts(&resumed), ["CRANE", "SLATE"]);
    }

    #[test]
    fn explicit_todays_id_resumes_saved_game() {
        let fixture = Fixture::new();
        let context = fixture.context();

        let daily = prepare_game(&PlayConfig::default(), &context, 600);
        run_play(daily, &context, Cursor::new("crane\nquit\n")).unwrap();

        let config = PlayConfig {
            id: Some(600),
            practice: false,
        };
        let resumed = prepare_game(&config, &context, 600);
        assert!(!resumed.practice);
        assert_eq!(guess_texts(&resumed), ["CRANE"]);
    }
}
