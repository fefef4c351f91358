use gambit::{perft, uci::UciMove, Game, Mode, Move, Position, Role, Square};
use iai::black_box;

fn bench_shallow_perft() {
    let pos = Position::new(Mode::Standard);
    assert_eq!(black_box(perft(black_box(&pos), 4)), 197_281);
}

fn bench_fairy_perft() {
    let pos = Position::new(Mode::Fairy);
    assert_eq!(perft(black_box(&pos), 2), 529);
}

fn bench_generate_moves() {
    let pos = Position::new(Mode::Fairy);
    assert_eq!(black_box(&pos).legal_move_list().len(), 23);
}

fn bench_play_unchecked() -> Position {
    let m = Move::Normal {
        role: Role::Jumper,
        from: Square::B1,
        capture: None,
        to: Square::D3,
        promotion: None,
    };

    let mut pos = black_box(Position::new(Mode::Fairy));
    pos.play_unchecked(m);
    pos
}

fn bench_play_and_undo() -> Game {
    let mut game = Game::new(Mode::Standard);

    for uci in ["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6", "b5c6", "d7c6"] {
        let uci = uci.parse::<UciMove>().expect("valid uci");
        game.play_uci(&uci).expect("legal move");
    }
    while game.undo_move() {}
    black_box(game)
}

iai::main!(
    bench_shallow_perft,
    bench_fairy_perft,
    bench_generate_moves,
    bench_play_unchecked,
    bench_play_and_undo,
);
