//! Command line options and engine settings

use clap::Parser;

use std::time::Duration;

use crate::error::ConfigError;
use crate::player::PlayerKind;

/// Search depths and time budget of an AI player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Plies searched by alpha-beta against human or AI opponents
    pub alpha_beta_depth: usize,
    /// Plies searched by expectimax against a random opponent
    pub expectimax_depth: usize,
    /// Wall-clock budget of a single move
    pub time_limit: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            alpha_beta_depth: 4,
            expectimax_depth: 6,
            time_limit: Duration::from_secs(5),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alpha_beta_depth == 0 {
            return Err(ConfigError::Validation(
                "alpha_beta_depth must be >= 1".into(),
            ));
        }
        if self.expectimax_depth == 0 {
            return Err(ConfigError::Validation(
                "expectimax_depth must be >= 1".into(),
            ));
        }
        if self.time_limit == Duration::from_secs(0) {
            return Err(ConfigError::Validation("time_limit must be > 0".into()));
        }
        Ok(())
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play Connect 4 against search-based AI players")]
pub struct Args {
    /// Controller of player 1, asked interactively when omitted
    #[clap(long, value_enum)]
    pub player1: Option<PlayerKind>,

    /// Controller of player 2, asked interactively when omitted
    #[clap(long, value_enum)]
    pub player2: Option<PlayerKind>,

    /// Seconds an AI player may think about a single move
    #[clap(short, long, default_value_t = 5.0)]
    pub time_limit: f64,

    /// Search depth used against human and AI opponents
    #[clap(long, default_value_t = 4)]
    pub alpha_beta_depth: usize,

    /// Search depth used against random opponents
    #[clap(long, default_value_t = 6)]
    pub expectimax_depth: usize,

    /// Play this many headless games in parallel and report the results
    #[clap(short, long)]
    pub games: Option<usize>,

    /// Seed for random players
    #[clap(short, long)]
    pub seed: Option<u64>,

    /// Draw the board as plain text
    #[clap(long)]
    pub no_color: bool,
}

impl Args {
    pub fn search_config(&self) -> Result<SearchConfig, ConfigError> {
        if !self.time_limit.is_finite() || self.time_limit <= 0.0 {
            return Err(ConfigError::Validation("time_limit must be > 0".into()));
        }
        let config = SearchConfig {
            alpha_beta_depth: self.alpha_beta_depth,
            expectimax_depth: self.expectimax_depth,
            time_limit: Duration::from_secs_f64(self.time_limit),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_play() {
        let args = Args::try_parse_from(["connect4"]).unwrap();
        assert_eq!(args.search_config().unwrap(), SearchConfig::default());
        assert!(args.player1.is_none());
        assert!(args.games.is_none());
    }

    #[test]
    fn parses_players_and_depths() {
        let args = Args::try_parse_from([
            "connect4",
            "--player1",
            "ai",
            "--player2",
            "random",
            "--expectimax-depth",
            "3",
            "--games",
            "10",
        ])
        .unwrap();
        assert_eq!(args.player1, Some(PlayerKind::Ai));
        assert_eq!(args.player2, Some(PlayerKind::Random));
        assert_eq!(args.search_config().unwrap().expectimax_depth, 3);
        assert_eq!(args.games, Some(10));
    }

    #[test]
    fn rejects_zero_depth_and_time() {
        let args = Args::try_parse_from(["connect4", "--alpha-beta-depth", "0"]).unwrap();
        assert!(args.search_config().is_err());

        let args = Args::try_parse_from(["connect4", "--time-limit", "0"]).unwrap();
        assert_eq!(
            args.search_config(),
            Err(ConfigError::Validation("time_limit must be > 0".into()))
        );
    }
}
