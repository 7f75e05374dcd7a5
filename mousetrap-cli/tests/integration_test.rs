//! Integration tests for the Mousetrap CLI
//!
//! Tests the full stack: engine, save file handling and scripted sessions

use std::io::Cursor;
use std::path::PathBuf;

use mousetrap_cli::{
    play_cmd::{load_game, play, Mode, PlayArgs},
    saves::SaveStore,
    saves_cmd::{self, SavesAction},
    session::Session,
};
use mousetrap_core::{
    Cell, Difficulty, GameConfig, GameRecord, GameResult, GameState, GameType, Player,
    STARTING_SCORE,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Fresh save file path, unique per test
fn temp_save_path(tag: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("mousetrap-{}-{}.json", tag, std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

/// Run a session over scripted input, returning the result and the output
fn run_script(game: GameState, path: &PathBuf, script: &str) -> (Session, Option<GameResult>, String) {
    let mut session = Session::new(game, path.clone());
    let mut out = Vec::new();
    let result = session.run(Cursor::new(script), &mut out).unwrap();
    (session, result, String::from_utf8(out).unwrap())
}

/// Mouse at the center with five of its six exits walled
fn nearly_trapped(game_type: GameType, difficulty: Option<Difficulty>) -> GameState {
    let record = GameRecord {
        game_type,
        difficulty,
        turn: 5,
        current_player: Player::Walls,
        mouse_position: Cell::center(),
        walls: vec![
            Cell::new(4, 5),
            Cell::new(4, 6),
            Cell::new(5, 4),
            Cell::new(5, 6),
            Cell::new(6, 5),
        ],
        score: STARTING_SCORE - 250,
    };
    GameState::from_record(&record).unwrap()
}

// ============================================================================
// SAVE STORE
// ============================================================================

#[test]
fn test_missing_empty_and_corrupt_files_load_empty() {
    let path = temp_save_path("missing");
    assert!(SaveStore::load(&path).unwrap().is_empty());

    std::fs::write(&path, "   \n").unwrap();
    assert!(SaveStore::load(&path).unwrap().is_empty());

    std::fs::write(&path, "{ not json").unwrap();
    assert!(SaveStore::load(&path).unwrap().is_empty());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_store_round_trip() {
    let path = temp_save_path("roundtrip");
    let game = GameState::new(&GameConfig::singleplayer(Difficulty::Hard).with_seed(21));

    let mut store = SaveStore::default();
    store.insert("first", game.to_record()).unwrap();
    store
        .insert("second", GameState::empty(GameType::OneVsOne, None).to_record())
        .unwrap();
    store.write(&path).unwrap();

    let loaded = SaveStore::load(&path).unwrap();
    assert_eq!(loaded, store);
    assert_eq!(loaded.names().collect::<Vec<_>>(), vec!["first", "second"]);
    assert_eq!(load_game(&path, "first").unwrap(), game);
    assert!(load_game(&path, "third").is_err());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_reads_hand_written_save() {
    let path = temp_save_path("handwritten");
    std::fs::write(
        &path,
        r#"{
  "tuesday": {
    "game_type": "1vs1",
    "difficulty": null,
    "turn": 2,
    "current_player": "walls",
    "mouse_pos": [4, 5],
    "walls": [[2, 2], [9, 9], [3, 7]],
    "score": 19950
  }
}"#,
    )
    .unwrap();

    let game = load_game(&path, "tuesday").unwrap();
    assert_eq!(game.game_type(), GameType::OneVsOne);
    assert_eq!(game.mouse_position(), Cell::new(4, 5));
    assert_eq!(game.walls().len(), 3);
    assert!(game.is_wall_turn());

    let _ = std::fs::remove_file(&path);
}

// ============================================================================
// SESSIONS
// ============================================================================

#[test]
fn test_one_vs_one_mouse_escapes() {
    let path = temp_save_path("escape");
    let script = "w 10 0\nm 4 5\nw 10 1\nm 3 5\nw 10 2\nm 2 5\nw 10 3\nm 1 5\nw 10 4\nm 0 5\n";
    let (session, result, out) =
        run_script(GameState::empty(GameType::OneVsOne, None), &path, script);

    assert_eq!(result, Some(GameResult::MouseEscaped));
    assert_eq!(session.game().turn(), 10);
    assert!(out.contains("Mouse wins"));
}

#[test]
fn test_one_vs_one_rejects_out_of_turn() {
    let path = temp_save_path("turns");
    let (session, result, out) = run_script(
        GameState::empty(GameType::OneVsOne, None),
        &path,
        "m 4 5\nw 1 1\nw 1 2\nq\n",
    );

    assert_eq!(result, None);
    assert!(out.contains("The mouse can't move to (4, 5)"));
    assert!(out.contains("Can't place a wall at (1, 2)"));
    assert_eq!(session.game().turn(), 1);
}

#[test]
fn test_singleplayer_last_wall_traps_mouse() {
    let path = temp_save_path("trap");
    let game = nearly_trapped(GameType::Singleplayer, Some(Difficulty::Hard));
    let (session, result, out) = run_script(game, &path, "w 6 6\n");

    assert_eq!(result, Some(GameResult::MouseTrapped));
    assert_eq!(session.game().mouse_position(), Cell::center());
    assert_eq!(session.game().turn(), 6);
    assert!(out.contains("You win"));
}

#[test]
fn test_singleplayer_mouse_answers_each_wall() {
    let path = temp_save_path("answer");
    let game = GameState::empty(GameType::Singleplayer, Some(Difficulty::Easy));
    let (session, result, out) = run_script(game, &path, "w 5 4\nm 4 5\nquit\n");

    assert_eq!(result, None);
    assert_eq!(session.game().mouse_position(), Cell::new(4, 5));
    assert_eq!(session.game().turn(), 2);
    assert!(out.contains("played by the computer"));
}

#[test]
fn test_decided_game_accepts_no_moves() {
    let path = temp_save_path("decided");
    let mut escaped = GameState::empty(GameType::OneVsOne, None).to_record();
    escaped.mouse_position = Cell::new(0, 5);
    escaped.turn = 9;
    let game = GameState::from_record(&escaped).unwrap();

    let (session, result, out) = run_script(game, &path, "w 1 1\nw 2 2\n");
    assert_eq!(result, Some(GameResult::MouseEscaped));
    assert!(out.contains("Mouse wins"));
    assert_eq!(session.game().turn(), 9);
    assert!(session.game().walls().is_empty());

    let trapped = nearly_trapped(GameType::Singleplayer, Some(Difficulty::Easy));
    let mut record = trapped.to_record();
    record.walls.push(Cell::new(6, 6));
    let game = GameState::from_record(&record).unwrap();
    let (_, result, out) = run_script(game, &path, "w 1 1\n");
    assert_eq!(result, Some(GameResult::MouseTrapped));
    assert!(out.contains("You win"));
}

#[test]
fn test_undo_redo_commands() {
    let path = temp_save_path("undo");
    let game = GameState::empty(GameType::Singleplayer, Some(Difficulty::Medium));
    let (session, _, out) = run_script(game, &path, "w 0 0\nu\nu\nu\nr\nq\n");

    assert!(out.contains("Nothing to undo"));
    assert_eq!(session.game().turn(), 1);
    assert!(session.game().walls().contains(&Cell::new(0, 0)));
    assert_eq!(session.game().mouse_position(), Cell::center());
}

#[test]
fn test_save_then_resume() {
    let path = temp_save_path("resume");
    let game = GameState::empty(GameType::Singleplayer, Some(Difficulty::Medium));
    let (session, _, out) = run_script(game, &path, "w 2 8\nsave   \nsave lunch\nq\n");

    assert!(out.contains("Save failed"));
    assert!(out.contains("Saved as 'lunch'"));
    let resumed = load_game(&path, "lunch").unwrap();
    assert_eq!(&resumed, session.game());

    let args = PlayArgs {
        mode: Mode::Singleplayer,
        difficulty: Difficulty::Easy,
        seed: None,
        load: Some("lunch".to_string()),
    };
    let mut out = Vec::new();
    let result = play(args, &path, Cursor::new("quit\n"), &mut out).unwrap();
    assert_eq!(result, None);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_saves_command() {
    let path = temp_save_path("command");
    let mut store = SaveStore::default();
    store
        .insert("keep", GameState::empty(GameType::OneVsOne, None).to_record())
        .unwrap();
    store
        .insert("drop", GameState::empty(GameType::OneVsOne, None).to_record())
        .unwrap();
    store.write(&path).unwrap();

    let mut out = Vec::new();
    saves_cmd::run(SavesAction::List, &path, &mut out).unwrap();
    let listing = String::from_utf8(out).unwrap();
    assert!(listing.contains("keep"));
    assert!(listing.contains("drop"));

    let mut out = Vec::new();
    saves_cmd::run(SavesAction::Show { name: "keep".to_string() }, &path, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains('M'));

    saves_cmd::run(SavesAction::Delete { name: "drop".to_string() }, &path, Vec::new()).unwrap();
    assert!(saves_cmd::run(SavesAction::Delete { name: "drop".to_string() }, &path, Vec::new()).is_err());
    assert_eq!(SaveStore::load(&path).unwrap().len(), 1);

    let _ = std::fs::remove_file(&path);
}

// ============================================================================
// FULL GAMES
// ============================================================================

#[test]
fn test_random_singleplayer_games_terminate() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        for seed in 0..5 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut game = GameState::with_rng(&GameConfig::singleplayer(difficulty), &mut rng);

            let mut plies = 0;
            while game.result() == GameResult::Ongoing {
                let free: Vec<Cell> = Cell::all()
                    .filter(|&c| game.is_free(c) && c != game.mouse_position())
                    .collect();
                let wall = free[rng.gen_range(0..free.len())];
                let before = game.mouse_position();

                assert!(game.place_wall(wall));
                if let Some(to) = game.move_mouse_ai() {
                    assert!(to.adjacent().any(|c| c == before));
                }
                assert!(!game.walls().contains(&game.mouse_position()));

                plies += 1;
                assert!(plies < 121, "game did not finish");
            }
        }
    }
}
