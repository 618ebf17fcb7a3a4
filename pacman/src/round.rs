//! A single round on a single maze: the tick-driven movement and collision model.

use glam::IVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::constants::{Cell, PURSUER_CADENCES, POWER_DURATION_MS, STARTING_LIVES};
use crate::error::ParseError;
use crate::events::GameEvent;
use crate::map::{direction::Direction, maze::Maze, parser::LayoutParser, parser::ParsedMap};
use crate::systems::{
    eat_item, move_player, move_pursuer, resolve_collisions, Collision, Outcome, PlayerState, PlayerStep, PowerTimer,
    PursuerMode, PursuerPolicy, PursuerState, RoundState,
};

/// Creates the generator pursuers draw from. A fixed seed makes a session reproducible.
pub fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

/// Tunables that shape a round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSettings {
    pub power_duration_ms: u32,
    pub policy: PursuerPolicy,
    /// Cadences handed out to pursuers round-robin in spawn order.
    pub pursuer_cadences: Vec<u32>,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            power_duration_ms: POWER_DURATION_MS,
            policy: PursuerPolicy::default(),
            pursuer_cadences: PURSUER_CADENCES.to_vec(),
        }
    }
}

impl RoundSettings {
    fn cadence_for(&self, pursuer: usize) -> u32 {
        if self.pursuer_cadences.is_empty() {
            return 1;
        }
        self.pursuer_cadences[pursuer % self.pursuer_cadences.len()]
    }
}

/// Player progress that survives from one level to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carryover {
    pub score: u32,
    pub lives: u32,
}

impl Default for Carryover {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
        }
    }
}

/// Read-only view of a round for renderers.
///
/// Borrowing the round for the lifetime of the snapshot means nothing can tick it while a frame
/// is being drawn.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub maze: &'a Maze,
    pub player: &'a PlayerState,
    pub pursuers: &'a [PursuerState],
    pub power_remaining_ms: u32,
    pub round: RoundState,
}

#[derive(Debug)]
pub struct Round {
    maze: Maze,
    player: PlayerState,
    pursuers: Vec<PursuerState>,
    power: PowerTimer,
    state: RoundState,
    policy: PursuerPolicy,
    power_duration_ms: u32,
    rng: SmallRng,
}

impl Round {
    pub fn new(parsed: &ParsedMap, level_index: usize, carry: Carryover, settings: &RoundSettings, rng: SmallRng) -> Self {
        let maze = Maze::from(parsed);

        let mut player = PlayerState::new(parsed.player_start, carry.lives);
        player.score = carry.score;

        let pursuers = parsed
            .pursuer_starts
            .iter()
            .enumerate()
            .map(|(id, &spawn)| PursuerState::new(id, spawn, settings.cadence_for(id)))
            .collect();

        let state = RoundState {
            pellets_remaining: maze.pellets_remaining(),
            level_index,
            outcome: Outcome::InProgress,
        };

        Self {
            maze,
            player,
            pursuers,
            power: PowerTimer::default(),
            state,
            policy: settings.policy,
            power_duration_ms: settings.power_duration_ms,
            rng,
        }
    }

    /// Parses `raw` and builds a round on it.
    pub fn from_layout<S: AsRef<str>>(
        raw: &[S],
        level_index: usize,
        carry: Carryover,
        settings: &RoundSettings,
        rng: SmallRng,
    ) -> Result<Self, ParseError> {
        let parsed = LayoutParser::parse(raw)?;
        Ok(Self::new(&parsed, level_index, carry, settings, rng))
    }

    /// Queues a turn for the player. The latest request wins; `None` is ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if !direction.is_none() {
            self.player.queued = direction;
        }
    }

    /// Runs one simulation tick: player move and item, pursuer moves, then collisions.
    ///
    /// Does nothing once the round has an outcome.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.outcome.is_terminal() {
            return events;
        }

        match move_player(&mut self.player, &self.maze) {
            PlayerStep::Moved(to) => {
                events.push(GameEvent::PlayerMoved { to });
                if let Some(cell) = eat_item(&mut self.player, &mut self.maze) {
                    events.push(GameEvent::ItemEaten { cell, at: to });
                    if cell == Cell::PowerPellet {
                        self.enter_power_mode();
                        events.push(GameEvent::PowerArmed {
                            duration_ms: self.power_duration_ms,
                        });
                    }
                }
            }
            PlayerStep::Blocked(queued) => events.push(GameEvent::PlayerBlocked { queued }),
            PlayerStep::Idle => {}
        }

        self.state.pellets_remaining = self.maze.pellets_remaining();
        if self.state.pellets_remaining == 0 {
            info!(level = self.state.level_index, score = self.player.score, "Maze cleared");
            self.state.outcome = Outcome::Won;
            self.end_power();
            events.push(GameEvent::RoundWon {
                level: self.state.level_index,
            });
            return events;
        }

        let player_position = self.player.position;
        for pursuer in self.pursuers.iter_mut() {
            if let Some(to) = move_pursuer(pursuer, &self.maze, player_position, &self.policy, &mut self.rng) {
                events.push(GameEvent::PursuerMoved { pursuer: pursuer.id, to });
            }
        }

        for collision in resolve_collisions(&mut self.player, &mut self.pursuers) {
            events.push(GameEvent::Collision(collision));
            if let Collision::GameOver { .. } = collision {
                self.state.outcome = Outcome::Lost;
                self.end_power();
                events.push(GameEvent::RoundLost {
                    level: self.state.level_index,
                });
            }
        }

        events
    }

    /// Counts the power window down by `elapsed_ms`. On expiry every pursuer goes back to chasing
    /// and the player loses its power in the same update.
    pub fn advance_power(&mut self, elapsed_ms: u32) -> Option<GameEvent> {
        if !self.power.advance(elapsed_ms) {
            return None;
        }

        self.end_power();
        Some(GameEvent::PowerExpired)
    }

    /// Stops the power window, clears the player's power and sends every pursuer back to chasing.
    fn end_power(&mut self) {
        self.power.disarm();
        self.player.powered = false;
        for pursuer in self.pursuers.iter_mut() {
            pursuer.mode = PursuerMode::Chase;
        }
    }

    fn enter_power_mode(&mut self) {
        self.power.arm(self.power_duration_ms);
        self.player.powered = self.power.is_active();
        if self.player.powered {
            for pursuer in self.pursuers.iter_mut() {
                pursuer.mode = PursuerMode::Flee;
            }
            debug!(pursuers = self.pursuers.len(), "Pursuers fleeing");
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            maze: &self.maze,
            player: &self.player,
            pursuers: &self.pursuers,
            power_remaining_ms: self.power.remaining_ms(),
            round: self.state,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn pursuers(&self) -> &[PursuerState] {
        &self.pursuers
    }

    pub fn power(&self) -> &PowerTimer {
        &self.power
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    /// Progress to hand to the next level.
    pub fn carryover(&self) -> Carryover {
        Carryover {
            score: self.player.score,
            lives: self.player.lives,
        }
    }

    /// Adds points outside the tick, e.g. a level completion bonus.
    pub fn award(&mut self, points: u32) {
        self.player.add_score(points);
    }

    /// Places a pursuer somewhere else. Intended for scripted scenarios and tests.
    pub fn place_pursuer(&mut self, pursuer: usize, position: IVec2) {
        if let Some(p) = self.pursuers.get_mut(pursuer) {
            p.position = position;
        }
    }
}
