//! Headless matches between automated players, run in parallel

use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;

use std::fmt;

use crate::board::{GameState, Player};
use crate::config::SearchConfig;
use crate::game::Game;
use crate::player::{AiPlayer, MoveProvider, PlayerKind, RandomPlayer};

/// Who plays each side of every game in a match
#[derive(Copy, Clone, Debug)]
pub struct MatchConfig {
    pub player1: PlayerKind,
    pub player2: PlayerKind,
    pub search: SearchConfig,
    /// Game `i` seeds its random players with `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct MatchSummary {
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
    /// Games abandoned because a player failed, e.g. by running out of time
    pub errors: usize,
}

impl MatchSummary {
    pub fn games(&self) -> usize {
        self.player_one_wins + self.player_two_wins + self.draws + self.errors
    }

    fn record(mut self, result: &Result<GameState>) -> Self {
        match result {
            Ok(GameState::Won(Player::One)) => self.player_one_wins += 1,
            Ok(GameState::Won(Player::Two)) => self.player_two_wins += 1,
            Ok(_) => self.draws += 1,
            Err(_) => self.errors += 1,
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            player_one_wins: self.player_one_wins + other.player_one_wins,
            player_two_wins: self.player_two_wins + other.player_two_wins,
            draws: self.draws + other.draws,
            errors: self.errors + other.errors,
        }
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: player 1 won {}, player 2 won {}, {} drawn, {} failed",
            self.games(),
            self.player_one_wins,
            self.player_two_wins,
            self.draws,
            self.errors
        )
    }
}

fn provider(
    kind: PlayerKind,
    player: Player,
    opponent: PlayerKind,
    config: &MatchConfig,
    seed: u64,
) -> Box<dyn MoveProvider> {
    match kind {
        PlayerKind::Random => Box::new(RandomPlayer::with_seed(player, seed)),
        _ => Box::new(AiPlayer::new(player, opponent, config.search)),
    }
}

fn play_one(config: &MatchConfig, index: usize) -> Result<GameState> {
    let seed = config.seed.wrapping_add(index as u64);
    let mut game = Game::new([
        provider(config.player1, Player::One, config.player2, config, seed),
        // keep the two random streams apart
        provider(config.player2, Player::Two, config.player1, config, !seed),
    ])?;
    game.play(|_| {})
}

/// Plays `games` independent games and counts the outcomes
pub fn run_matches(config: &MatchConfig, games: usize) -> Result<MatchSummary> {
    if config.player1 == PlayerKind::Human || config.player2 == PlayerKind::Human {
        return Err(anyhow!("human players cannot take part in batch simulation"));
    }
    config.search.validate()?;

    let progress = if config.show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let summary = (0..games)
        .into_par_iter()
        .map(|index| {
            let result = play_one(config, index);
            if let Err(err) = &result {
                warn!("game {} failed: {:#}", index, err);
            }
            progress.inc(1);
            MatchSummary::default().record(&result)
        })
        .reduce(MatchSummary::default, MatchSummary::merge);

    progress.finish();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn random_match(seed: u64) -> MatchConfig {
        MatchConfig {
            player1: PlayerKind::Random,
            player2: PlayerKind::Random,
            search: SearchConfig::default(),
            seed,
            show_progress: false,
        }
    }

    #[test]
    fn counts_every_game() -> Result<()> {
        let summary = run_matches(&random_match(3), 40)?;
        assert_eq!(summary.games(), 40);
        assert_eq!(summary.errors, 0);
        Ok(())
    }

    #[test]
    fn seeded_matches_repeat() -> Result<()> {
        assert_eq!(
            run_matches(&random_match(11), 16)?,
            run_matches(&random_match(11), 16)?
        );
        Ok(())
    }

    #[test]
    fn rejects_human_players() {
        let mut config = random_match(0);
        config.player2 = PlayerKind::Human;
        assert!(run_matches(&config, 1).is_err());
    }
}
