use chaser_client::protocol::{decode_response, decode_turn_start_signal, CodecError};
use chaser_client::GameStatus;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn in_progress_cells_match_digits(cells in proptest::collection::vec(0u8..4, 9)) {
        let mut wire = vec![b'0'];
        wire.extend(cells.iter().map(|d| b'0' + d));
        let snapshot = decode_response(&wire).unwrap();
        prop_assert_eq!(snapshot.status(), GameStatus::InProgress);
        let decoded: Vec<u8> = snapshot.cells().iter().map(|c| c.digit()).collect();
        prop_assert_eq!(decoded, cells);
    }

    #[test]
    fn short_replies_never_decode(wire in proptest::collection::vec(b'0'..=b'9', 0..10)) {
        let is_truncated = matches!(decode_response(&wire), Err(CodecError::Truncated { .. }));
        prop_assert!(is_truncated);
    }

    #[test]
    fn any_non_digit_is_rejected(position in 0usize..10, byte in any::<u8>()) {
        prop_assume!(!byte.is_ascii_digit());
        let mut wire = *b"0000000000";
        wire[position] = byte;
        prop_assert_eq!(
            decode_response(&wire).unwrap_err(),
            CodecError::NonDigit { position, byte }
        );
    }

    #[test]
    fn turn_start_only_on_leading_at(wire in proptest::collection::vec(any::<u8>(), 0..16)) {
        prop_assert_eq!(decode_turn_start_signal(&wire), wire.first() == Some(&b'@'));
    }
}
