//! End-to-end tests driving the menus through scripted console input.

use scalable_tictactoe::{Console, MenuController, Mode, RandomPlayer, Session, WinTally};
use std::io::Cursor;
use t3sc::Player;

fn controller(size: usize) -> MenuController {
    let session = Session::new(
        Mode::Multiplayer,
        size,
        RandomPlayer::from_seed("CPU", Some(11)),
    );
    MenuController::new(session)
}

fn run(controller: &mut MenuController, script: &str, start: Option<Mode>) -> String {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let mut console = Console::new(&mut input, &mut output);
    controller.run(&mut console, start).expect("Menu run");
    String::from_utf8(output).expect("UTF-8 output")
}

#[test]
fn test_play_again_keeps_tally_and_main_menu_resets_it() {
    let mut menu = controller(3);
    let script = "\
3
2
2
1 1
2 1
1 2
1
1 1
2 1
1 2
";
    let text = run(&mut menu, script, None);

    assert!(text.contains("Tic Tac Toe | Multiplayer"));
    assert!(text.contains("Player 1 (X) won!"));
    assert!(text.contains("P1: 2/P2: 0"));
    // Input ran out on the results screen, which exits without a reset.
    assert_eq!(menu.session().tally().get(Player::One), 2);
    assert_eq!(*menu.session().size(), 2);
}

#[test]
fn test_returning_to_main_menu_resets_tally() {
    let mut menu = controller(2);
    let script = "\
2
1 1
2 1
1 2
2
4
";
    let text = run(&mut menu, script, None);

    assert!(text.contains("P1: 1/P2: 0"));
    assert_eq!(*menu.session().tally(), WinTally::new());
}

#[test]
fn test_draw_is_reported_and_not_tallied() {
    let mut menu = controller(3);
    let script = "\
1 1
1 2
2 2
3 3
2 3
1 3
3 1
2 1
3 2
3
";
    let text = run(&mut menu, script, Some(Mode::Multiplayer));

    assert!(text.contains("Draw..."));
    assert!(text.contains("P1: 0/P2: 0"));
}

#[test]
fn test_rejected_board_size_keeps_previous() {
    let mut menu = controller(4);
    let text = run(&mut menu, "3\n15\n3\nbig\n4\n", None);

    assert_eq!(text.matches("Board size must be a number from 2 to 11.").count(), 2);
    assert_eq!(*menu.session().size(), 4);
}

#[test]
fn test_closed_input_at_main_menu_exits() {
    let mut menu = controller(3);
    let text = run(&mut menu, "", None);
    assert!(text.contains("Tic Tac Toe | Main Menu"));
}

#[test]
fn test_single_player_against_cpu_finishes() {
    let mut menu = controller(3);
    // The human walks the board in order; taken cells are rejected and the
    // next line is tried, so nine lines always cover every human turn.
    let mut script = String::new();
    for row in 1..=3 {
        for col in 1..=3 {
            script.push_str(&format!("{row} {col}\n"));
        }
    }
    script.push_str("3\n");

    let text = run(&mut menu, &script, Some(Mode::SinglePlayer));

    assert!(text.contains("Tic Tac Toe | Singleplayer"));
    let tally = menu.session().tally();
    let wins = tally.get(Player::One) + tally.get(Player::Two);
    if text.contains("won!") {
        assert_eq!(wins, 1);
    } else {
        assert!(text.contains("Draw..."));
        assert_eq!(wins, 0);
    }
}

#[test]
fn test_abandoning_a_match_returns_to_main_menu() {
    let mut menu = controller(2);
    let script = "\
2
1 1
2 1
1 2
1
1 1
menu
n
2 2
menu
yes
4
";
    let text = run(&mut menu, script, None);

    assert_eq!(text.matches("End game and return to the main menu? (y/n)").count(), 2);
    assert!(text.contains("Player 2 (O) played row 2, column 2"));
    assert_eq!(text.matches("Tic Tac Toe | Main Menu").count(), 2);
    assert_eq!(text.matches("Tic Tac Toe | Results").count(), 1);
    // The first match's win was cleared when the main menu came back.
    assert!(text.contains("P1: 1/P2: 0"));
    assert_eq!(*menu.session().tally(), WinTally::new());
}
