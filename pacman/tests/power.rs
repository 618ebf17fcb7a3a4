mod common;

use common::{round, settings};
use pacman::events::GameEvent;
use pacman::map::direction::Direction;
use pacman::systems::{Outcome, PowerTimer, PursuerMode};
use speculoos::prelude::*;

const TWO_POWER: [&str; 3] = ["WWWWWWW", "WPoo.GW", "WWWWWWW"];

#[test]
fn test_second_power_pellet_refreshes_instead_of_stacking() {
    let mut round = round(&TWO_POWER, 3, &settings(&[1000], 0.0));
    round.set_direction(Direction::Right);

    round.tick();
    assert_that(&round.power().remaining_ms()).is_equal_to(5000);
    assert_that(&round.advance_power(3000)).is_none();
    assert_that(&round.power().remaining_ms()).is_equal_to(2000);

    round.tick();
    assert_that(&round.power().remaining_ms()).is_equal_to(5000);
    assert_that(&round.player().powered).is_true();
}

#[test]
fn test_expiry_returns_pursuers_to_chase() {
    let mut round = round(&TWO_POWER, 3, &settings(&[1000], 0.0));
    round.set_direction(Direction::Right);
    round.tick();
    assert_that(&round.pursuers()[0].mode).is_equal_to(PursuerMode::Flee);

    assert_that(&round.advance_power(4999)).is_none();
    assert_that(&round.player().powered).is_true();

    assert_that(&round.advance_power(1)).is_equal_to(Some(GameEvent::PowerExpired));
    assert_that(&round.player().powered).is_false();
    assert_that(&round.pursuers()[0].mode).is_equal_to(PursuerMode::Chase);

    // Expiry is reported once
    assert_that(&round.advance_power(100)).is_none();
}

#[test]
fn test_winning_on_a_power_pellet_ends_power() {
    let mut round = round(&["WWWWW", "WPoGW", "WWWWW"], 3, &settings(&[1], 0.0));
    round.set_direction(Direction::Right);
    round.tick();

    assert_that(&round.outcome()).is_equal_to(Outcome::Won);
    assert_that(&round.power().is_active()).is_false();
    assert_that(&round.power().remaining_ms()).is_equal_to(0);
    assert_that(&round.player().powered).is_false();
    assert_that(&round.pursuers()[0].mode).is_equal_to(PursuerMode::Chase);
}

#[test]
fn test_timer_overshoot_expires_once() {
    let mut timer = PowerTimer::default();
    timer.arm(250);
    assert_that(&timer.advance(100)).is_false();
    assert_that(&timer.advance(1000)).is_true();
    assert_that(&timer.is_active()).is_false();
    assert_that(&timer.remaining_ms()).is_equal_to(0);
    assert_that(&timer.advance(1000)).is_false();
}

#[test]
fn test_disarm_is_silent() {
    let mut timer = PowerTimer::default();
    timer.arm(500);
    timer.disarm();
    assert_that(&timer.advance(1000)).is_false();
}
