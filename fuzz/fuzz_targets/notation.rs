#![no_main]

use gambit::{uci::UciMove, Square};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(square) = Square::from_ascii(data) {
        assert!(square.to_string().as_bytes().eq_ignore_ascii_case(data));
    }

    let Ok(uci) = UciMove::from_ascii(data) else {
        return;
    };
    let roundtripped = UciMove::from_ascii(uci.to_string().as_bytes()).expect("roundtrip");
    assert_eq!(uci, roundtripped);
});
