//! Player registry
//!
//! Turns a [`PlayerConfig`] or a short descriptor into a boxed
//! [`Player`] so a game driver can pick strategies at runtime.
//!
//! Descriptors:
//! - `greedy`
//! - `random`
//! - `random:SEED` (reproducible random player)

use greedy_player::GreedyPlayer;
use othello_core::{Player, PlayerConfig, PlayerKind, Side};
use random_player::RandomPlayer;
use thiserror::Error;
use tracing::debug;


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
    #[error("invalid seed {seed:?} for player {name}")]
    InvalidSeed { name: String, seed: String },
}

pub fn build_player(config: &PlayerConfig) -> Box<dyn Player> {
    debug!(kind = ?config.kind, side = %config.side, seed = ?config.seed, "building player");
    match config.kind {
        PlayerKind::Greedy => Box::new(GreedyPlayer::new(config.side)),
        PlayerKind::Random => match config.seed {
            Some(seed) => Box::new(RandomPlayer::with_seed(config.side, seed)),
            None => Box::new(RandomPlayer::new(config.side)),
        },
    }
}

/// Parse a descriptor such as `"greedy"` or `"random:42"` into a config.
pub fn parse_player_descriptor(descriptor: &str, side: Side) -> Result<PlayerConfig, RegistryError> {
    let mut parts = descriptor.trim().splitn(2, ':');
    let name = parts.next().unwrap_or("").to_lowercase();
    let seed = parts.next();

    let kind = match name.as_str() {
        "greedy" => PlayerKind::Greedy,
        "random" | "rand" => PlayerKind::Random,
        _ => return Err(RegistryError::UnknownPlayer(descriptor.to_string())),
    };

    let mut config = PlayerConfig::new(kind, side);
    if let Some(seed) = seed {
        let parsed = seed.parse::<u64>().map_err(|_| RegistryError::InvalidSeed {
            name: name.clone(),
            seed: seed.to_string(),
        })?;
        config.seed = Some(parsed);
    }
    Ok(config)
}

pub fn create_player(descriptor: &str, side: Side) -> Result<Box<dyn Player>, RegistryError> {
    Ok(build_player(&parse_player_descriptor(descriptor, side)?))
}
