use textfilter::{base64, Base64, CodecError, Direction, Filter, TextFilter};

mod helpers;
use helpers::{run_in_chunks, run_with_sizes};

#[test]
fn empty_input_round_trips() {
    let mut filter = Base64::new(Direction::Encode);
    assert_eq!(Vec::<u8>::new(), filter.encode(b"").unwrap());
    assert!(filter.ok());
    assert_eq!(Vec::<u8>::new(), filter.decode(b"").unwrap());
    assert!(filter.ok());
}

#[test]
fn padding_for_each_remainder() {
    assert_eq!("YQ==", base64::encode(&[0x61]));
    assert_eq!("YWI=", base64::encode(&[0x61, 0x62]));
    assert_eq!("YWJj", base64::encode(&[0x61, 0x62, 0x63]));
}

#[test]
fn misplaced_padding_rejected() {
    assert!(base64::decode("Y=Qg").is_err());
    assert_eq!(Err(CodecError::InvalidPadding(1)), base64::decode("Y=Qg"));
}

#[test]
fn chunk_sizes_from_spec_agree() {
    let input = b"0123456789";
    let whole = base64::encode(input);

    let mut filter = Base64::new(Direction::Encode);
    let ones = run_with_sizes(&mut filter, input, &[1; 9]).unwrap();
    filter.clear();
    let fives = run_with_sizes(&mut filter, input, &[5]).unwrap();
    filter.clear();
    let all = run_with_sizes(&mut filter, input, &[]).unwrap();

    assert_eq!(whole.as_bytes(), &ones[..]);
    assert_eq!(ones, fives);
    assert_eq!(fives, all);
}

#[test]
fn chunk_boundaries_do_not_change_output() {
    let input = b"any carnal pleasure.";
    let whole = base64::encode(input);

    for chunk_len in 1..input.len() {
        let mut filter = Base64::new(Direction::Encode);
        let chunked = run_in_chunks(&mut filter, input, chunk_len).unwrap();
        assert_eq!(whole.as_bytes(), &chunked[..], "chunk_len {}", chunk_len);
    }

    for chunk_len in 1..whole.len() {
        let mut filter = Base64::new(Direction::Decode);
        let decoded = run_in_chunks(&mut filter, whole.as_bytes(), chunk_len).unwrap();
        assert_eq!(input.to_vec(), decoded, "chunk_len {}", chunk_len);
    }
}

#[test]
fn whitespace_skipped_during_decode() {
    let mut filter = Base64::new(Direction::Decode);
    assert_eq!(
        b"hello world".to_vec(),
        filter.decode(b"aGVs\r\nbG8g d29y\tbGQ=\n").unwrap()
    );
}

#[test]
fn non_whitespace_garbage_rejected() {
    assert_eq!(
        Err(CodecError::InvalidByte(4, b'*')),
        base64::decode("aGVs*bG8=")
    );
}

#[test]
fn unpadded_tail_rejected_at_finalize() {
    let mut filter = Base64::new(Direction::Decode);
    assert_eq!(b"abc".to_vec(), filter.update(b"YWJjYQ").unwrap());
    assert!(filter.ok());
    assert_eq!(Err(CodecError::InvalidLength), filter.finalize());
    assert!(!filter.ok());
}

#[test]
fn trailing_garbage_after_padding_rejected() {
    assert!(base64::decode("YQ==YQ==").is_err());
}

#[test]
fn clear_restores_fresh_state() {
    let mut filter = Base64::new(Direction::Decode);
    filter.update(b"YWJ").unwrap();
    assert!(filter.update(b"\x01").is_err());
    filter.clear();
    assert!(filter.ok());
    assert_eq!(b"abc".to_vec(), filter.update(b"YWJj").unwrap());
    assert!(filter.finalize().is_ok());
}

#[test]
fn error_offsets_accumulate_across_updates() {
    let mut filter = Base64::new(Direction::Decode);
    filter.update(b"YWJj").unwrap();
    filter.update(b"YWJj").unwrap();
    assert_eq!(
        Err(CodecError::InvalidByte(9, b'~')),
        filter.update(b"Y~")
    );
}

#[test]
fn update_after_finalize_starts_new_session() {
    let mut filter = Base64::new(Direction::Encode);
    filter.update(b"a").unwrap();
    let tail = filter.finalize().unwrap();
    assert_eq!(b"YQ==".to_vec(), tail);
    // implicit reset: the next update begins a fresh stream
    let mut out = filter.update(b"ab").unwrap();
    out.extend(filter.finalize().unwrap());
    assert_eq!(b"YWI=".to_vec(), out);
}

#[test]
fn string_surface_round_trips() {
    let mut filter = Base64::default();
    let text = filter.encode_string("hello world").unwrap();
    assert_eq!("aGVsbG8gd29ybGQ=", text);
    assert_eq!("hello world", filter.decode_string(&text).unwrap());
}

#[test]
fn decode_string_fails_cleanly_on_non_utf8_bytes() {
    let mut filter = Base64::default();
    // decodes to 0xFF 0xFF, not valid UTF-8
    match filter.decode_string("//8=") {
        Err(CodecError::Utf8(_)) => {}
        other => panic!("expected Utf8 error, got {:?}", other),
    }
}

#[test]
fn rfc4648_test_vectors() {
    for (raw, text) in [
        (&b""[..], ""),
        (b"f", "Zg=="),
        (b"fo", "Zm8="),
        (b"foo", "Zm9v"),
        (b"foob", "Zm9vYg=="),
        (b"fooba", "Zm9vYmE="),
        (b"foobar", "Zm9vYmFy"),
    ] {
        assert_eq!(text, base64::encode(raw));
        assert_eq!(raw.to_vec(), base64::decode(text).unwrap());
    }
}
