use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::constants::LOOP_TIME;
use crate::events::GameEvent;
use crate::game::Game;
use crate::input::InputSource;

/// Real-time driver: feeds wall-clock time into a [`Game`] and paces the loop.
pub struct App {
    pub game: Game,
    input: Box<dyn InputSource>,
    last_tick: Instant,
}

impl App {
    /// Starts the game's first level and readies the loop.
    pub fn new(mut game: Game, input: Box<dyn InputSource>) -> Self {
        for event in game.start() {
            log_event(&event);
        }
        info!(stage = ?game.stage(), "Application initialized");

        App {
            game,
            input,
            last_tick: Instant::now(),
        }
    }

    /// Executes a single frame of the loop, sleeping off whatever is left of `LOOP_TIME`.
    ///
    /// # Returns
    ///
    /// `true` while the session is still being played, `false` once it has ended.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();
        let elapsed = start.duration_since(self.last_tick);
        self.last_tick = start;

        let requested = self.game.snapshot().and_then(|snapshot| self.input.poll(&snapshot));
        if let Some(direction) = requested {
            trace!(direction = direction.as_ref(), "Input requested");
            self.game.set_direction(direction);
        }

        for event in self.game.advance(elapsed) {
            log_event(&event);
        }

        if self.game.stage().is_over() {
            return false;
        }

        let remaining = LOOP_TIME.saturating_sub(start.elapsed());
        if remaining != Duration::ZERO {
            spin_sleep::sleep(remaining);
        }
        true
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::PlayerMoved { .. } | GameEvent::PursuerMoved { .. } | GameEvent::PlayerBlocked { .. } => {
            trace!(?event, "Event")
        }
        _ => debug!(?event, "Event"),
    }
}
