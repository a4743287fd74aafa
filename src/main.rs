use anyhow::Result;
use clap::Parser;

use std::io::{stdin, stdout, Write};

use connect4_engine::board::{GameState, Player};
use connect4_engine::config::{Args, SearchConfig};
use connect4_engine::game::Game;
use connect4_engine::player::*;
use connect4_engine::tournament::{run_matches, MatchConfig};
use connect4_engine::logging;

mod display;

/// Asks on stdin who controls `player` until a known answer is given
fn ask_player_kind(player: Player) -> Result<PlayerKind> {
    let stdin = stdin();
    loop {
        let mut buffer = String::new();
        print!("Enter {} type (ai, random, human): ", player.to_string().to_lowercase());
        stdout().flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            return Err(anyhow::anyhow!("no player type given for {}", player));
        }
        match buffer.trim().to_lowercase().as_str() {
            "ai" => return Ok(PlayerKind::Ai),
            "random" => return Ok(PlayerKind::Random),
            "human" => return Ok(PlayerKind::Human),
            _ => println!("Unknown answer given"),
        }
    }
}

fn make_provider(
    kind: PlayerKind,
    player: Player,
    opponent: PlayerKind,
    config: SearchConfig,
    seed: Option<u64>,
) -> Box<dyn MoveProvider> {
    match kind {
        PlayerKind::Ai => Box::new(AiPlayer::new(player, opponent, config)),
        PlayerKind::Random => match seed {
            Some(seed) => Box::new(RandomPlayer::with_seed(player, seed.wrapping_add(player.id() as u64))),
            None => Box::new(RandomPlayer::new(player)),
        },
        PlayerKind::Human => Box::new(HumanPlayer::new(
            player,
            std::io::BufReader::new(stdin()),
            stdout(),
        )),
    }
}

fn main() -> Result<()> {
    logging();
    let args = Args::parse();
    let config = args.search_config()?;

    if let Some(games) = args.games {
        let player1 = args.player1.unwrap_or(PlayerKind::Ai);
        let player2 = args.player2.unwrap_or(PlayerKind::Random);
        let summary = run_matches(
            &MatchConfig {
                player1,
                player2,
                search: config,
                seed: args.seed.unwrap_or_default(),
                show_progress: true,
            },
            games,
        )?;
        println!("{} vs {}: {}", player1, player2, summary);
        return Ok(());
    }

    println!("Welcome to Connect 4\n");

    let player1 = match args.player1 {
        Some(kind) => kind,
        None => ask_player_kind(Player::One)?,
    };
    let player2 = match args.player2 {
        Some(kind) => kind,
        None => ask_player_kind(Player::Two)?,
    };

    let mut game = Game::new([
        make_provider(player1, Player::One, player2, config, args.seed),
        make_provider(player2, Player::Two, player1, config, args.seed),
    ])?;

    let color = !args.no_color;
    display::draw(game.board(), color)?;
    let state = game.play(|game| {
        if let Err(err) = display::draw(game.board(), color) {
            println!("Failed to draw board: {}", err);
        }
    })?;

    match state {
        GameState::Won(player) => println!("{} wins!", game.provider(player).name()),
        GameState::Draw => println!("Draw!"),
        GameState::Playing => {}
    }
    Ok(())
}
