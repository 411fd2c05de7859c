use std::io::Cursor;

use termqr::{read_bounded, Error, MAX_INPUT_BYTES};

#[test]
fn exactly_at_limit_succeeds() {
    let data: Vec<u8> = (0..MAX_INPUT_BYTES).map(|i| (i % 251) as u8).collect();
    let out = read_bounded(Cursor::new(data.clone()), MAX_INPUT_BYTES).unwrap();
    assert_eq!(out, data);
}

#[test]
fn one_over_limit_fails() {
    let data = vec![b'q'; MAX_INPUT_BYTES + 1];
    match read_bounded(Cursor::new(data), MAX_INPUT_BYTES) {
        Err(Error::InputTooLarge { limit }) => assert_eq!(limit, 8192),
        other => panic!("expected InputTooLarge, got {:?}", other),
    }
}

#[test]
fn far_over_limit_reads_only_cap_plus_one() {
    let mut cur = Cursor::new(vec![0u8; 1 << 20]);
    let err = read_bounded(&mut cur, MAX_INPUT_BYTES).unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert_eq!(cur.position() as usize, MAX_INPUT_BYTES + 1);
}
