//! Tests for headless replay.

use tictactoe_timeline::{Intent, replay};

fn intents(script: &[&str]) -> Vec<Intent> {
    script.iter().map(|s| s.parse().unwrap()).collect()
}

#[test]
fn test_replay_with_labels_and_jump() {
    let game = replay(&intents(&[
        "top-left", "center", "top-center", "bottom-center", "top-right", "@2", "8",
    ]))
    .unwrap();

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_move(), 3);
    assert_eq!(game.view().status(), "next player is O");
}

#[test]
fn test_replay_text_output() {
    let game = replay(&intents(&["0", "4", "1", "7", "2"])).unwrap();
    let text = game.view().to_text();

    assert!(text.starts_with("X|X|X\n-+-+-\n4|O|6\n-+-+-\n7|O|9"));
    assert!(text.contains("winner is X"));
    assert!(text.contains("> 6. go to move #5"));
}

#[test]
fn test_replay_json_output() {
    let game = replay(&intents(&["0", "4", "1", "7", "2", "@1"])).unwrap();
    let json = serde_json::to_value(game.view()).unwrap();

    assert_eq!(json["status"], "next player is O");
    assert_eq!(json["current_move"], 1);
    assert_eq!(json["moves"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["moves"][0]["description"], "go to game start");
    assert_eq!(json["highlights"][0], false);
}

#[test]
fn test_replay_rejects_unknown_step() {
    let err = replay(&intents(&["0", "@5"])).unwrap_err();
    assert!(err.message.contains("history has 2 entries"));
}
