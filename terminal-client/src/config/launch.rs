use common::config::Validate;
use common::games::CandidatePicker;
use common::name_generator::generate_player_name;

use super::{Config, GameType, TicTacToeOpponent};

/// Settings given on the command line for a single run.
#[derive(Debug, Default)]
pub struct LaunchOverrides {
    pub game: Option<GameType>,
    pub opponent: Option<TicTacToeOpponent>,
    pub name: Option<String>,
    pub seed: Option<u64>,
    /// Keep the overrides in the config file as well.
    pub save_config: bool,
}

#[derive(Debug)]
pub struct LaunchPlan {
    /// Config the session runs with, overrides applied.
    pub effective: Config,
    /// Config to write back. Overrides only reach it with `save_config`.
    pub persisted: Config,
    pub game: GameType,
    pub player_name: String,
    pub name_generated: bool,
}

impl LaunchPlan {
    pub fn needs_save(&self, stored: &Config) -> bool {
        self.persisted != *stored
    }
}

/// Merges the stored config with the overrides. The chosen game is always
/// recorded as `last_game`; a generated name is kept without the overrides.
pub fn plan_launch<P: CandidatePicker>(
    stored: &Config,
    overrides: &LaunchOverrides,
    picker: &mut P,
) -> Result<LaunchPlan, String> {
    let mut persisted = stored.clone();
    let mut name_generated = false;

    if persisted.player_name.is_none() && overrides.name.is_none() {
        persisted.player_name = Some(generate_player_name(picker));
        name_generated = true;
    }

    let game = overrides
        .game
        .or(stored.last_game)
        .unwrap_or(GameType::TicTacToe);
    persisted.last_game = Some(game);

    let mut effective = persisted.clone();
    if let Some(ref name) = overrides.name {
        effective.player_name = Some(name.clone());
    }
    if let Some(seed) = overrides.seed {
        effective.seed = Some(seed);
    }
    if let Some(opponent) = overrides.opponent {
        effective.tictactoe.opponent = opponent;
    }
    effective.validate()?;

    if overrides.save_config {
        persisted = effective.clone();
    }

    let player_name = effective.player_name.clone().unwrap_or_default();

    Ok(LaunchPlan {
        effective,
        persisted,
        game,
        player_name,
        name_generated,
    })
}
