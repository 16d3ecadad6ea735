use super::*;
use crate::results::{GameResult, MatchReport, MatchResult};
use machine_engine::MachinePlayer;
use random_engine::RandomPlayer;

#[test]
fn plays_a_short_match_to_completion() {
    let config = MatchConfig {
        num_games: 2,
        depth: 1,
        move_limit: 30,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);

    let mut machine = MachinePlayer::with_depth(1);
    let mut random = RandomPlayer::new();
    let result = runner.run_match(&mut machine, &mut random);

    assert_eq!(result.total_games(), 2);
    assert!((0.0..=1.0).contains(&result.score()));
}

#[test]
fn randomized_openings_still_finish() {
    let config = MatchConfig {
        num_games: 1,
        depth: 1,
        move_limit: 20,
        opening_random_plies: 4,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);

    let mut a = RandomPlayer::new();
    let mut b = RandomPlayer::new();
    let result = runner.run_match(&mut a, &mut b);
    assert_eq!(result.total_games(), 1);
}

#[test]
fn flipping_a_result_swaps_win_and_loss() {
    assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
    assert_eq!(GameResult::Loss.flipped(), GameResult::Win);
    assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
}

#[test]
fn score_counts_draws_as_half() {
    let mut result = MatchResult::new();
    result.record(GameResult::Win);
    result.record(GameResult::Win);
    result.record(GameResult::Draw);
    result.record(GameResult::Loss);

    assert_eq!(result.total_games(), 4);
    assert!((result.score() - 0.625).abs() < 1e-9);

    assert_eq!(MatchResult::new().score(), 0.5);
}

#[test]
fn config_loads_from_partial_toml() {
    let parsed: MatchConfig = toml::from_str(
        r#"
        num_games = 4
        depth = 2
        "#,
    )
    .unwrap();

    assert_eq!(parsed.num_games, 4);
    assert_eq!(parsed.depth, 2);
    assert_eq!(parsed.move_limit, MatchConfig::default().move_limit);
    assert!(parsed.alternate_colors);
}

#[test]
fn report_round_trips_through_json() {
    let mut result = MatchResult::new();
    result.record(GameResult::Win);
    result.record(GameResult::Draw);

    let report = MatchReport::new(
        "machine".to_string(),
        "random".to_string(),
        MatchConfig::default(),
        result,
    );

    let json = serde_json::to_string(&report).unwrap();
    let restored: MatchReport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, report);
    assert!(restored.summary().contains("machine vs random"));
}
