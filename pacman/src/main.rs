#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::sync::Arc;

use anyhow::Context;
use pacman::app::App;
use pacman::config::{load_config, GameConfig};
use pacman::constants::LOOP_TIME;
use pacman::game::Game;
use pacman::highscore::HighScore;
use pacman::input::Autopilot;
use pacman::leaderboard::{HttpLeaderboard, Leaderboard, LocalLeaderboard, ScoreReporter};
use pacman::logging::setup_logging;
use pacman::map::render::render_ascii;
use pacman::round::make_rng;
use tracing::{info, warn};

fn build_reporter(config: &GameConfig) -> anyhow::Result<ScoreReporter> {
    let fallback = match &config.fallback_path {
        Some(path) => LocalLeaderboard::open_or_in_memory(path),
        None => LocalLeaderboard::in_memory(),
    };

    let primary = match &config.leaderboard_url {
        Some(url) => {
            let client = HttpLeaderboard::new(url).context("Could not build leaderboard client")?;
            info!(endpoint = client.endpoint(), "Reporting scores to leaderboard");
            Some(Arc::new(client) as Arc<dyn Leaderboard>)
        }
        None => None,
    };

    Ok(ScoreReporter::new(primary, Arc::new(fallback)))
}

/// Runs one headless session with the autopilot at the controls.
pub fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = load_config().context("Invalid configuration")?;
    let high_score = match &config.highscore_path {
        Some(path) => HighScore::load(path).unwrap_or_else(|e| {
            warn!(error = %e, path = %path.display(), "Unreadable high score, starting from zero");
            HighScore::empty_at(path)
        }),
        None => HighScore::in_memory(0),
    };
    let reporter = build_reporter(&config)?;
    // Offset so the autopilot does not mirror the pursuers' draws under a fixed seed
    let autopilot = Autopilot::new(make_rng(config.seed.map(|seed| seed.wrapping_add(1))));

    let game = Game::new(config, high_score, Some(reporter))?;
    let mut app = App::new(game, Box::new(autopilot));

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    while app.run() {}

    if let Some(snapshot) = app.game.snapshot() {
        info!("Final board:\n{}", render_ascii(&snapshot));
    }
    info!(
        stage = app.game.stage().as_ref(),
        level = app.game.level_index(),
        score = app.game.score(),
        high_score = app.game.high_score(),
        "Session ended"
    );

    app.game.wait_for_report();
    Ok(())
}
