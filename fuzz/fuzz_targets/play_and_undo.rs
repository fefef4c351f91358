#![no_main]

use arbitrary::Arbitrary;
use gambit::{Game, Mode, Role, Square};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Data {
    mode: Mode,
    candidates: Vec<(Square, Square, Option<Role>)>,
}

fuzz_target!(|data: Data| {
    let mut game = Game::new(data.mode);

    for (from, to, promotion) in data.candidates {
        let before = game.position().clone();
        let legal = before.legal_moves(from).contains(to) && !before.is_game_over();

        match game.try_play(from, to, promotion) {
            Ok(m) => {
                assert!(legal);
                assert!(before.is_legal(m));
                assert!(!game.is_in_check(before.turn()));
            }
            Err(_) => {
                assert!(!legal);
                assert_eq!(game.position(), &before);
            }
        }
    }

    while game.undo_move() {}
    assert_eq!(game.position(), &gambit::Position::new(data.mode));
});
