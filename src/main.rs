//! Forge Defender entry point
//!
//! Headless demo driver: runs a seeded survival game with a scripted
//! input source at a fixed cadence, then submits the final score to an
//! in-memory leaderboard. A real frontend replaces the bot with key
//! handlers and the in-memory store with its backend.

use std::thread;
use std::time::Duration;

use forge_defender::consts::*;
use forge_defender::scores::{InMemoryScoreStore, LEADERBOARD_SIZE, PendingScore, ScoreStore};
use forge_defender::sim::{GameMode, GameState, TickInput, WeaponKind, tick};

/// Demo driver owning the state and the shared input, like a frontend would
struct Game {
    state: GameState,
    input: TickInput,
}

impl Game {
    fn new(weapon: WeaponKind, seed: u64) -> Self {
        Self {
            state: GameState::new(weapon, GameMode::default(), seed),
            input: TickInput::default(),
        }
    }

    /// Scripted stand-in for the browser's key handlers: chase the hazard
    /// closest to the ground and press fire when the muzzle lines up.
    fn drive(&mut self) {
        self.input.move_left = false;
        self.input.move_right = false;

        let target = self.state.hazards.iter().max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if let Some(hazard) = target {
            let muzzle_x = self.state.player.pos.x + MUZZLE_OFFSET_X;
            let error = hazard.pos.x - muzzle_x;
            if error < -PLAYER_SPEED {
                self.input.move_left = true;
            } else if error > PLAYER_SPEED {
                self.input.move_right = true;
            } else {
                self.input.attack_pressed = true;
            }
        }
    }
}

fn main() {
    env_logger::init();

    let seed = 0xF0E6_CAFE;
    let mut game = Game::new(WeaponKind::Gun, seed);
    log::info!("starting survival run with seed {seed:#x}");

    let frame = Duration::from_secs(1) / TICK_RATE;
    let max_ticks = (TICK_RATE as u64) * 120; // two-minute cap for the demo

    while !game.state.phase.is_terminal() && game.state.time_ticks < max_ticks {
        game.drive();
        tick(&mut game.state, &mut game.input);
        thread::sleep(frame);
    }

    let snapshot = game.state.snapshot();
    log::info!(
        "run over at tick {}: phase {:?}, score {}, health {}",
        game.state.time_ticks,
        snapshot.phase,
        snapshot.score,
        snapshot.health
    );

    let mut store = InMemoryScoreStore::new();
    match PendingScore::new("Demo Knight", game.state.score, game.state.player.weapon) {
        Ok(pending) => {
            if let Err(err) = pending.submit(&mut store) {
                log::warn!("score submission failed: {err}");
            }
        }
        Err(err) => log::warn!("score not submitted: {err}"),
    }

    match store.top_n(LEADERBOARD_SIZE) {
        Ok(top) => {
            println!("=== Leaderboard ===");
            for (rank, entry) in top.iter().enumerate() {
                println!(
                    "{:>2}. {:<20} {:>6}  [{}]",
                    rank + 1,
                    entry.name,
                    entry.score,
                    entry.weapon
                );
            }
        }
        Err(err) => log::warn!("could not read leaderboard: {err}"),
    }
}
