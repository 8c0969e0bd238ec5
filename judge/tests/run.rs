use std::path::Path;

use judge::{run, Args, TURN_LOG_COLUMNS};
use tracing_subscriber::filter::LevelFilter;

fn args(dir: &Path, seed: u64) -> Args {
    Args {
        num_games: 5,
        seed: Some(seed),
        output: dir.join("turns.csv"),
        record_games_to_directory: None,
        win_score: 25,
        max_rounds: None,
        cautious: false,
        log_level: LevelFilter::OFF,
    }
}

fn read_rows(path: &Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), TURN_LOG_COLUMNS);
    reader.records().map(|r| r.unwrap()).collect()
}

#[test]
fn writes_one_row_per_turn() {
    let dir = tempfile::tempdir().unwrap();
    let args = args(dir.path(), 11);
    let summary = run(&args).unwrap();
    assert_eq!(summary.games, 5);
    assert_eq!(summary.games_won, 5);

    let rows = read_rows(&args.output);
    assert_eq!(rows.len(), summary.turns);
    let game_ids: std::collections::BTreeSet<&str> = rows.iter().map(|r| &r[0]).collect();
    assert_eq!(game_ids.len(), 5);
    for row in &rows {
        for flag in [4, 7, 9, 12] {
            assert!(matches!(&row[flag], "0" | "1"));
        }
    }
}

#[test]
fn same_seed_same_statistics() {
    let dir = tempfile::tempdir().unwrap();
    let first = run(&args(dir.path(), 99)).unwrap();
    let second = run(&args(dir.path(), 99)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn cautious_players_never_cash_out() {
    let dir = tempfile::tempdir().unwrap();
    let args = Args {
        cautious: true,
        ..args(dir.path(), 3)
    };
    let summary = run(&args).unwrap();
    assert_eq!(summary.cash_outs, 0);
    assert_eq!(summary.resets, 0);
    for row in read_rows(&args.output) {
        assert_eq!(&row[9], "0");
    }
}

#[test]
fn records_every_game_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let games_dir = dir.path().join("games");
    std::fs::create_dir(&games_dir).unwrap();
    let args = Args {
        num_games: 3,
        record_games_to_directory: Some(games_dir.clone()),
        ..args(dir.path(), 5)
    };
    let summary = run(&args).unwrap();

    let mut turns = 0;
    for num in 1..=3 {
        let path = games_dir.join(format!("game_{:0>6}.json", num));
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        turns += json["turns"].as_array().unwrap().len();
    }
    assert_eq!(turns, summary.turns);
}

#[test]
fn abandons_long_games() {
    let dir = tempfile::tempdir().unwrap();
    let args = Args {
        win_score: i32::MAX,
        max_rounds: Some(2),
        ..args(dir.path(), 1)
    };
    let summary = run(&args).unwrap();
    assert_eq!(summary.games_abandoned, 5);
    assert_eq!(summary.rounds, 10);
    assert_eq!(summary.turns, 2 * summary.players);
}
