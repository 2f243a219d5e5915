//! Command implementations

pub mod archive;
pub mod play;
pub mod score;
pub mod settings;
pub mod targets;

pub use archive::{ArchiveStatistics, run_archive};
pub use play::{PlayConfig, PlayContext, prepare_game, run_play};
pub use score::{ScoreResult, score_guess};
pub use settings::update_settings;
pub use targets::{TargetsResult, list_targets};
