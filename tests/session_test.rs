//! Tests for session lifecycle and turn control.

use side_stacker::{
    Difficulty, GameMode, GameSession, Move, MoveError, MoveOutcome, Player, Side, TurnState,
};

fn pvp_session() -> GameSession {
    GameSession::new(7, GameMode::PlayerVsPlayer).expect("Valid size")
}

#[test]
fn test_first_player_opens_the_game() {
    let session = pvp_session();
    assert_eq!(session.turn(), TurnState::InProgress(Player::First));
    assert_eq!(session.turn().to_move(), Some(Player::First));
    assert_eq!(session.turn().winner(), None);
}

#[test]
fn test_accepted_moves_alternate_turns() {
    let mut session = pvp_session();

    let outcome = session
        .submit_move(Move::new(0, Side::Left), Player::First)
        .expect("Valid move");
    assert_eq!(outcome, MoveOutcome::Applied { landing: (0, 0) });
    assert_eq!(session.turn(), TurnState::InProgress(Player::Second));

    let outcome = session
        .submit_move(Move::new(0, Side::Right), Player::Second)
        .expect("Valid move");
    assert_eq!(outcome, MoveOutcome::Applied { landing: (0, 6) });
    assert_eq!(session.turn(), TurnState::InProgress(Player::First));
}

#[test]
fn test_out_of_turn_move_rejected() {
    let mut session = pvp_session();
    let result = session.submit_move(Move::new(0, Side::Left), Player::Second);
    assert_eq!(result, Err(MoveError::NotYourTurn(Player::Second)));
    // Rejection is a no-op; the right player can still move.
    assert_eq!(session.turn(), TurnState::InProgress(Player::First));
    assert!(session
        .submit_move(Move::new(0, Side::Left), Player::First)
        .is_ok());
}

#[test]
fn test_out_of_range_row_rejected() {
    let mut session = pvp_session();
    let result = session.submit_move(Move::new(7, Side::Left), Player::First);
    assert_eq!(result, Err(MoveError::OutOfRange(7)));
    assert_eq!(session.turn(), TurnState::InProgress(Player::First));
    assert!(session.history().is_empty());
}

#[test]
fn test_full_row_rejected_from_both_sides() {
    let mut session = pvp_session();
    // Alternating markers fill row 0 left to right without forming a run.
    let players = [Player::First, Player::Second];
    for turn in 0..7 {
        session
            .submit_move(Move::new(0, Side::Left), players[turn % 2])
            .expect("Row has room");
    }

    assert_eq!(
        session.submit_move(Move::new(0, Side::Left), Player::Second),
        Err(MoveError::RowFull(0, Side::Left))
    );
    assert_eq!(
        session.submit_move(Move::new(0, Side::Right), Player::Second),
        Err(MoveError::RowFull(0, Side::Right))
    );
    // Still Second's turn; another row works.
    assert!(session
        .submit_move(Move::new(1, Side::Right), Player::Second)
        .is_ok());
}

#[test]
fn test_winning_sequence_ends_the_game() {
    let mut session = pvp_session();
    // First stacks row 0 from the left, Second row 1; First's fourth
    // marker completes the run at (0, 3).
    let moves = [
        (Move::new(0, Side::Left), Player::First),
        (Move::new(1, Side::Left), Player::Second),
        (Move::new(0, Side::Left), Player::First),
        (Move::new(1, Side::Left), Player::Second),
        (Move::new(0, Side::Left), Player::First),
        (Move::new(1, Side::Left), Player::Second),
    ];
    for (mv, player) in moves {
        assert!(matches!(
            session.submit_move(mv, player),
            Ok(MoveOutcome::Applied { .. })
        ));
    }

    let outcome = session
        .submit_move(Move::new(0, Side::Left), Player::First)
        .expect("Winning move");
    assert_eq!(
        outcome,
        MoveOutcome::Won {
            player: Player::First
        }
    );
    assert_eq!(session.turn(), TurnState::Won(Player::First));
    assert_eq!(session.turn().winner(), Some(Player::First));

    // The game is over for both players.
    assert_eq!(
        session.submit_move(Move::new(2, Side::Left), Player::Second),
        Err(MoveError::GameAlreadyOver)
    );
    assert_eq!(
        session.submit_move(Move::new(2, Side::Left), Player::First),
        Err(MoveError::GameAlreadyOver)
    );
    assert_eq!(session.turn(), TurnState::Won(Player::First));
}

#[test]
fn test_current_state_is_idempotent() {
    let mut session = pvp_session();
    session
        .submit_move(Move::new(3, Side::Right), Player::First)
        .unwrap();

    let first = session.current_state();
    let second = session.current_state();
    assert_eq!(first, second);
}

#[test]
fn test_reset_clears_board_and_turn() {
    let mut session = pvp_session();
    session
        .submit_move(Move::new(0, Side::Left), Player::First)
        .unwrap();
    session
        .submit_move(Move::new(4, Side::Right), Player::Second)
        .unwrap();

    session.reset();
    assert_eq!(session.turn(), TurnState::InProgress(Player::First));
    assert!(session.history().is_empty());
    let fresh = GameSession::new(7, GameMode::PlayerVsPlayer).unwrap();
    assert_eq!(session.current_state(), fresh.current_state());
}

#[test]
fn test_replay_reproduces_the_game() {
    let mut session = pvp_session();
    let script = [
        Move::new(0, Side::Left),
        Move::new(1, Side::Left),
        Move::new(0, Side::Left),
        Move::new(1, Side::Left),
        Move::new(0, Side::Left),
        Move::new(1, Side::Left),
        Move::new(0, Side::Left),
    ];
    let players = [Player::First, Player::Second];
    for (turn, mv) in script.iter().enumerate() {
        session.submit_move(*mv, players[turn % 2]).unwrap();
    }
    assert_eq!(session.turn(), TurnState::Won(Player::First));

    let replayed = session.replay(session.history()).expect("Valid replay");
    assert_eq!(replayed.current_state(), session.current_state());
    assert_eq!(replayed.turn(), TurnState::Won(Player::First));
}

#[test]
fn test_replay_rejects_moves_past_the_end() {
    let session = pvp_session();
    let mut script = vec![
        Move::new(0, Side::Left),
        Move::new(1, Side::Left),
        Move::new(0, Side::Left),
        Move::new(1, Side::Left),
        Move::new(0, Side::Left),
        Move::new(1, Side::Left),
        Move::new(0, Side::Left),
    ];
    script.push(Move::new(2, Side::Left));
    assert_eq!(
        session.replay(&script),
        Err(MoveError::GameAlreadyOver)
    );
}

#[test]
fn test_legal_moves_shrink_as_rows_fill() {
    let mut session = pvp_session();
    assert_eq!(session.legal_moves().len(), 14);

    let players = [Player::First, Player::Second];
    for turn in 0..7 {
        session
            .submit_move(Move::new(6, Side::Left), players[turn % 2])
            .unwrap();
    }
    let remaining = session.legal_moves();
    assert_eq!(remaining.len(), 12);
    assert!(remaining.iter().all(|mv| mv.row != 6));
    assert!(!session.board().is_full());
}

#[test]
fn test_expects_ai_move_tracks_the_ai_seat() {
    let ai = side_stacker::AiConfig {
        difficulty: Difficulty::Easy,
        player: Player::Second,
    };
    let mut session = GameSession::new(7, GameMode::PlayerVsAi(ai)).unwrap();
    assert!(!session.expects_ai_move());

    session
        .submit_move(Move::new(0, Side::Left), Player::First)
        .unwrap();
    assert!(session.expects_ai_move());

    session
        .submit_move(Move::new(0, Side::Right), Player::Second)
        .unwrap();
    assert!(!session.expects_ai_move());
}

#[test]
fn test_disabled_ai_never_expects_a_move() {
    let ai = side_stacker::AiConfig {
        difficulty: Difficulty::None,
        player: Player::Second,
    };
    let mut session = GameSession::new(7, GameMode::PlayerVsAi(ai)).unwrap();
    session
        .submit_move(Move::new(0, Side::Left), Player::First)
        .unwrap();
    assert!(!session.expects_ai_move());

    let pvp = pvp_session();
    assert!(!pvp.expects_ai_move());
}
