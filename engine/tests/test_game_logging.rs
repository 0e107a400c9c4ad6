use std::fs;
use std::path::PathBuf;

use klondike_engine::logger::{format_game_id, GameLogger, GameRecord, MoveEntry};
use klondike_engine::moves::{Move, MoveSource};
use klondike_engine::rules::Rules;

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn sample_record(ts: Option<String>) -> GameRecord {
    GameRecord {
        game_id: "20250102-000001".to_string(),
        seed: Some(1),
        rules: Rules::default(),
        moves: vec![
            MoveEntry {
                mv: Move::Draw,
                applied: true,
            },
            MoveEntry {
                mv: Move::ToFoundation {
                    source: MoveSource::Waste,
                },
                applied: false,
            },
            MoveEntry {
                mv: Move::TableauToTableau { from: 0, to: 1 },
                applied: true,
            },
        ],
        ts,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("gamelog");
    let mut logger = GameLogger::create(&path).expect("create logger");
    logger.write(&sample_record(None)).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
}

#[test]
fn sequential_ids_increment() {
    let mut logger = GameLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
    assert_eq!(format_game_id("20251231", 3), "20251231-000003");
}

#[test]
fn ts_is_generated_when_missing() {
    let path = tmp_path("gamelog_ts");
    let mut logger = GameLogger::create(&path).expect("create logger");
    logger.write(&sample_record(None)).expect("write");

    let text = fs::read_to_string(&path).expect("read file");
    let parsed: GameRecord =
        serde_json::from_str(text.trim_end()).expect("record must round-trip");
    assert!(parsed.ts.is_some(), "logger must inject a timestamp");
    assert_eq!(parsed.moves, sample_record(None).moves);
}

#[test]
fn ts_is_preserved_when_present() {
    let path = tmp_path("gamelog_ts_keep");
    let mut logger = GameLogger::create(&path).expect("create logger");
    let ts = Some("2025-01-02T03:04:05Z".to_string());
    logger.write(&sample_record(ts.clone())).expect("write");

    let text = fs::read_to_string(&path).expect("read file");
    let parsed: GameRecord =
        serde_json::from_str(text.trim_end()).expect("record must round-trip");
    assert_eq!(parsed.ts, ts);
}
