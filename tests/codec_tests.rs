use chaser_client::protocol::{
    decode_order, decode_response, decode_turn_start_signal, encode_control_ack, encode_order,
    CodecError,
};
use chaser_client::{Direction, FieldCell, GameStatus, OrderKind};

#[test]
fn test_decode_in_progress_reply() {
    let snapshot = decode_response(b"0123000000").unwrap();
    assert_eq!(snapshot.status(), GameStatus::InProgress);
    assert_eq!(
        snapshot.cells(),
        &[
            FieldCell::Block,
            FieldCell::Item,
            FieldCell::Enemy,
            FieldCell::Empty,
            FieldCell::Empty,
            FieldCell::Empty,
            FieldCell::Empty,
            FieldCell::Empty,
            FieldCell::Empty,
        ]
    );
}

#[test]
fn test_decode_finished_reply() {
    let snapshot = decode_response(b"1000000000").unwrap();
    assert_eq!(snapshot.status(), GameStatus::Finished);
}

#[test]
fn test_decode_rejects_nine_characters() {
    assert_eq!(
        decode_response(b"012300000").unwrap_err(),
        CodecError::Truncated {
            expected: 10,
            got: 9
        }
    );
    assert!(decode_response(b"").is_err());
}

#[test]
fn test_decode_rejects_non_digits() {
    assert!(matches!(
        decode_response(b"0123 00000"),
        Err(CodecError::NonDigit { position: 4, .. })
    ));
    assert!(matches!(
        decode_response(b"@000000000"),
        Err(CodecError::NonDigit { position: 0, .. })
    ));
}

#[test]
fn test_decode_rejects_unknown_cell() {
    assert_eq!(
        decode_response(b"0000400000").unwrap_err(),
        CodecError::UnknownCell {
            position: 4,
            digit: 4
        }
    );
}

#[test]
fn test_decode_ignores_trailing_bytes() {
    let snapshot = decode_response(b"0000000003\r\n").unwrap();
    assert_eq!(snapshot.cells()[8], FieldCell::Enemy);
}

#[test]
fn test_grid_accessors() {
    let snapshot = decode_response(b"0010203000").unwrap();
    assert_eq!(snapshot.neighbor(Direction::Up), FieldCell::Block);
    assert_eq!(snapshot.neighbor(Direction::Left), FieldCell::Item);
    assert_eq!(snapshot.neighbor(Direction::Right), FieldCell::Enemy);
    assert_eq!(snapshot.neighbor(Direction::Down), FieldCell::Empty);
    assert_eq!(snapshot.cell(1, 2), Some(FieldCell::Enemy));
    assert_eq!(snapshot.cell(3, 0), None);
    assert_eq!(snapshot.rows().count(), 3);
}

#[test]
fn test_turn_start_signal() {
    assert!(decode_turn_start_signal(b"@"));
    assert!(decode_turn_start_signal(b"@0000000000"));
    assert!(!decode_turn_start_signal(b"#"));
    assert!(!decode_turn_start_signal(b""));
}

#[test]
fn test_order_codes() {
    assert_eq!(encode_order(OrderKind::GetReady), "gr\r\n");
    assert_eq!(encode_order(OrderKind::WalkUp), "wu\r\n");
    assert_eq!(encode_order(OrderKind::LookLeft), "ll\r\n");
    assert_eq!(encode_order(OrderKind::SearchDown), "sd\r\n");
    assert_eq!(encode_order(OrderKind::PutRight), "pr\r\n");
    assert_eq!(encode_control_ack(), "#\r\n");
}

#[test]
fn test_order_code_table_is_bijective() {
    for kind in OrderKind::ALL {
        let line = encode_order(kind);
        assert_eq!(decode_order(line.as_bytes()).unwrap(), kind);
        assert_eq!(decode_order(kind.code().as_bytes()).unwrap(), kind);
    }
    assert!(matches!(
        decode_order(b"xx\r\n"),
        Err(CodecError::UnknownOrderCode(code)) if code == "xx"
    ));
}
