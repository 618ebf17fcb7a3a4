//! This module contains the session lifecycle: level loading, the three round timers, win and
//! loss handling, high score tracking, and score reporting.

use std::thread::JoinHandle;
use std::time::Duration;

use pacman_common::ScoreRecord;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::events::GameEvent;
use crate::formatter;
use crate::highscore::HighScore;
use crate::input::InputLatch;
use crate::leaderboard::ScoreReporter;
use crate::map::{direction::Direction, layouts, parser::LayoutParser, parser::ParsedMap};
use crate::round::{make_rng, Carryover, Round, RoundSettings, Snapshot};
use crate::systems::{GameStage, Outcome};
use crate::timing::Timers;

/// A round together with everything that drives it. Dropping this stops the round for good.
struct RunningRound {
    round: Round,
    timers: Timers,
    input: InputLatch,
}

/// A play session spanning one or more levels.
pub struct Game {
    config: GameConfig,
    settings: RoundSettings,
    levels: Vec<ParsedMap>,
    stage: GameStage,
    level_index: usize,
    /// Bumped on every level load, so a batch of ticks never spills into a fresh round.
    generation: u64,
    running: Option<RunningRound>,
    high_score: HighScore,
    reporter: Option<ScoreReporter>,
    pending_report: Option<JoinHandle<()>>,
    rng: SmallRng,
}

impl Game {
    /// Creates a session over the built-in level catalogue.
    pub fn new(config: GameConfig, high_score: HighScore, reporter: Option<ScoreReporter>) -> GameResult<Self> {
        Self::with_levels(config, layouts::catalogue(), high_score, reporter)
    }

    /// Creates a session over custom layouts. Every layout is parsed up front, so a broken one
    /// fails here instead of in the middle of a session.
    pub fn with_levels<S: AsRef<str>, L: AsRef<[S]>>(
        config: GameConfig,
        levels: &[L],
        high_score: HighScore,
        reporter: Option<ScoreReporter>,
    ) -> GameResult<Self> {
        let config = config.validate()?;
        let levels = levels
            .iter()
            .map(|layout| LayoutParser::parse(layout.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        if levels.is_empty() {
            return Err(GameError::InvalidState("no levels to play".into()));
        }

        debug!(levels = levels.len(), best = high_score.best(), "Game created");
        Ok(Self {
            settings: config.round_settings(),
            rng: make_rng(config.seed),
            level_index: config.level % levels.len(),
            generation: 0,
            config,
            levels,
            stage: GameStage::Loading,
            running: None,
            high_score,
            reporter,
            pending_report: None,
        })
    }

    /// Loads the configured first level and starts play.
    pub fn start(&mut self) -> Vec<GameEvent> {
        let carry = Carryover {
            score: 0,
            lives: self.config.starting_lives,
        };
        self.load_level(self.level_index, carry)
    }

    /// Tears down the current round and readies the given level. Any previous timers are stopped
    /// before the new round exists.
    fn load_level(&mut self, index: usize, carry: Carryover) -> Vec<GameEvent> {
        self.stage = GameStage::Loading;
        if let Some(mut previous) = self.running.take() {
            previous.timers.stop_all();
        }

        self.level_index = index % self.levels.len();
        self.generation += 1;
        let round = Round::new(
            &self.levels[self.level_index],
            self.level_index,
            carry,
            &self.settings,
            SmallRng::from_rng(&mut self.rng),
        );
        info!(
            level = self.level_index,
            pellets = round.state().pellets_remaining,
            pursuers = round.pursuers().len(),
            score = carry.score,
            lives = carry.lives,
            "Level loaded"
        );

        self.running = Some(RunningRound {
            round,
            timers: Timers::from_config(&self.config),
            input: InputLatch::default(),
        });
        self.stage = GameStage::InProgress;
        vec![GameEvent::LevelLoaded { level: self.level_index }]
    }

    /// Requests a turn. Only the most recent request before the next input commit counts.
    pub fn set_direction(&mut self, direction: Direction) {
        if let Some(running) = self.running.as_mut() {
            running.input.set(direction);
        }
    }

    /// Feeds elapsed wall-clock time into the round's timers and runs whatever came due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.stage != GameStage::InProgress {
            return events;
        }
        let Some(running) = self.running.as_mut() else {
            return events;
        };

        if running.timers.input.advance(elapsed) > 0 {
            if let Some(direction) = running.input.take() {
                running.round.set_direction(direction);
            }
        }

        let step_ms = running.timers.power.period().as_millis() as u32;
        for _ in 0..running.timers.power.advance(elapsed) {
            if let Some(event) = running.round.advance_power(step_ms) {
                events.push(event);
            }
        }

        let ticks = running.timers.tick.advance(elapsed);
        let generation = self.generation;
        for _ in 0..ticks {
            events.extend(self.tick());
            // A finished or replaced round must not see the rest of this batch
            if self.stage != GameStage::InProgress || self.generation != generation {
                break;
            }
        }
        events
    }

    /// Runs exactly one simulation tick, committing any pending input first.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        if self.stage != GameStage::InProgress {
            return Vec::new();
        }
        let Some(running) = self.running.as_mut() else {
            return Vec::new();
        };

        if let Some(direction) = running.input.take() {
            running.round.set_direction(direction);
        }

        formatter::increment_tick();
        let mut events = running.round.tick();
        let outcome = running.round.outcome();

        self.record_high_score(&mut events);
        match outcome {
            Outcome::InProgress => {}
            Outcome::Won => self.on_round_won(&mut events),
            Outcome::Lost => self.on_round_lost(&mut events),
        }
        events
    }

    fn on_round_won(&mut self, events: &mut Vec<GameEvent>) {
        let Some(running) = self.running.as_mut() else {
            return;
        };
        running.timers.stop_all();

        let bonus = self.config.completion_bonus;
        running.round.award(bonus);
        events.push(GameEvent::BonusAwarded { points: bonus });
        info!(level = self.level_index, bonus, score = running.round.player().score, "Level complete");
        self.record_high_score(events);

        if self.config.advance_levels {
            let carry = self.running.as_ref().map(|r| r.round.carryover()).unwrap_or_default();
            events.extend(self.load_level(self.level_index + 1, carry));
        } else {
            self.stage = GameStage::Won;
            info!(score = self.score(), "Session complete");
            self.report_score();
        }
    }

    fn on_round_lost(&mut self, _events: &mut Vec<GameEvent>) {
        if let Some(running) = self.running.as_mut() {
            running.timers.stop_all();
        }
        self.stage = GameStage::Lost;
        info!(level = self.level_index, score = self.score(), "Game over");
        self.report_score();
    }

    fn record_high_score(&mut self, events: &mut Vec<GameEvent>) {
        let score = self.score();
        match self.high_score.record(score) {
            Ok(true) => {
                debug!(score, "New high score");
                events.push(GameEvent::NewHighScore { score });
            }
            Ok(false) => {}
            Err(e) => warn!(error = %e, score, "Failed to persist high score"),
        }
    }

    fn report_score(&mut self) {
        let Some(reporter) = &self.reporter else {
            return;
        };
        let record = ScoreRecord::new(self.config.player_name.clone(), self.score());
        self.pending_report = reporter.report(record);
    }

    /// Leaves the session (e.g. back to a menu). Timers stop and the round is dropped.
    pub fn exit(&mut self) {
        if let Some(mut running) = self.running.take() {
            running.timers.stop_all();
            info!(level = self.level_index, "Round torn down");
        }
        self.stage = GameStage::Loading;
    }

    /// Blocks until an in-flight score submission has finished.
    pub fn wait_for_report(&mut self) {
        if let Some(handle) = self.pending_report.take() {
            if handle.join().is_err() {
                warn!("Score reporter thread panicked");
            }
        }
    }

    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        self.running.as_ref().map(|running| running.round.snapshot())
    }

    pub fn round(&self) -> Option<&Round> {
        self.running.as_ref().map(|running| &running.round)
    }

    pub fn timers(&self) -> Option<&Timers> {
        self.running.as_ref().map(|running| &running.timers)
    }

    pub fn stage(&self) -> GameStage {
        self.stage
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn score(&self) -> u32 {
        self.running.as_ref().map_or(0, |running| running.round.player().score)
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
