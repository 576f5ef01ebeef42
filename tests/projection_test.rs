//! Tests for the read-only session projection.

use strictly_timetravel::{GameSession, Location, Status};

#[test]
fn test_initial_projection() {
    let projection = GameSession::new().projection();
    assert_eq!(projection.moves().len(), 1);
    let start = &projection.moves()[0];
    assert_eq!(start.description(), "Go to game start");
    assert_eq!(start.location(), &None);
    assert_eq!(start.location_text(), "");
    assert!(*start.is_current());
    assert_eq!(projection.sort_label(), "sort in descending");
}

#[test]
fn test_ascending_and_descending_lists() {
    let mut session = GameSession::new();
    for cell in [4, 0, 5] {
        session.submit_move(cell);
    }
    session.jump_to(1);

    let ascending = session.projection();
    let labels: Vec<String> = ascending.moves().iter().map(|m| m.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "Go to move #1(1, 1)",
            "Go to move #2(0, 0)",
            "Go to move #3(1, 2)",
        ]
    );

    session.toggle_sort_order();
    let descending = session.projection();
    let steps: Vec<usize> = descending.moves().iter().map(|m| *m.step()).collect();
    assert_eq!(steps, vec![3, 2, 1, 0]);
    assert_eq!(descending.sort_label(), "sort in ascending");

    // Highlight follows the cursor, not the list position.
    let current: Vec<usize> = descending
        .moves()
        .iter()
        .filter(|m| *m.is_current())
        .map(|m| *m.step())
        .collect();
    assert_eq!(current, vec![1]);
    assert_eq!(*descending.cursor(), 1);
    assert_eq!(descending.board(), ascending.board());
}

#[test]
fn test_projection_shows_board_at_cursor() {
    let mut session = GameSession::new();
    session.submit_move(4);
    session.submit_move(0);
    session.jump_to(1);
    let projection = session.projection();
    assert_eq!(projection.board().occupied(), 1);
    assert_eq!(projection.status(), &Status::NextPlayer(strictly_timetravel::Player::O));
    assert_eq!(
        projection.moves()[1].location(),
        &Some(Location::new(1, 1))
    );
}

#[test]
fn test_projection_text_and_json() {
    let mut session = GameSession::new();
    session.submit_move(8);
    let projection = session.projection();

    let text = projection.to_string();
    assert!(text.starts_with("1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|X"));
    assert!(text.contains("Next player: O"));
    assert!(text.contains("> 1. Go to move #1(2, 2)"));
    assert!(text.contains("  0. Go to game start"));

    let json: serde_json::Value = serde_json::to_value(&projection).unwrap();
    assert_eq!(json["cursor"], 1);
    assert_eq!(json["order"], "Ascending");
    assert_eq!(json["moves"][1]["description"], "Go to move #1");
    assert_eq!(json["moves"][1]["location"]["row"], 2);
    assert_eq!(json["status"]["NextPlayer"], "O");
}
