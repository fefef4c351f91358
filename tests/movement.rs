use gambit::{attacks, Bitboard, Color, Role, Square};
use serde::Deserialize;
use serde_with::{formats::SpaceSeparator, serde_as, DisplayFromStr, StringWithSeparator};

#[serde_as]
#[derive(Deserialize)]
struct Record {
    #[serde_as(as = "DisplayFromStr")]
    color: Color,
    #[serde_as(as = "DisplayFromStr")]
    role: Role,
    #[serde_as(as = "DisplayFromStr")]
    square: Square,
    #[serde_as(as = "StringWithSeparator<SpaceSeparator, Square>")]
    destinations: Vec<Square>,
}

#[test]
fn test_movement_on_empty_board() {
    let mut reader = csv::Reader::from_path("tests/movement.csv").expect("reader");

    for (i, record) in reader.deserialize().enumerate() {
        let record: Record = record.expect("record");

        let expected: Bitboard = record.destinations.into_iter().collect();
        assert_eq!(
            attacks::destinations_on_empty_board(record.role.of(record.color), record.square),
            expected,
            "line {}",
            i + 2
        );
    }
}
