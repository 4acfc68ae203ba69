//! Randomized round-trip and chunking-invariance tests for both codecs.

use rand::Rng;

use textfilter::{Base64, Direction, Filter, Hex, TextFilter};

mod helpers;
use helpers::run_with_sizes;

/// Split `len` into random chunk sizes (possibly including empty chunks).
fn random_sizes<R: Rng>(rng: &mut R, len: usize) -> Vec<usize> {
    let mut sizes = Vec::new();
    let mut remaining = len;
    while remaining > 0 {
        let take = rng.gen_range(0..=remaining.min(7));
        sizes.push(take);
        remaining -= take;
    }
    sizes
}

fn roundtrip_random_chunked<F: TextFilter>(make: fn(Direction) -> F, max_len: usize) {
    let mut rng = rand::thread_rng();

    for len in 0..max_len {
        let input: Vec<u8> = (0..len).map(|_| rng.gen::<u8>()).collect();

        let mut encoder = make(Direction::Encode);
        let whole = encoder.encode(&input).unwrap();

        // encoding must not depend on chunk boundaries
        let mut encoder = make(Direction::Encode);
        let sizes = random_sizes(&mut rng, input.len());
        let chunked = run_with_sizes(&mut encoder, &input, &sizes).unwrap();
        assert_eq!(whole, chunked, "len {} sizes {:?}", len, sizes);

        // and the decoder must reproduce the input from any chunking
        let mut decoder = make(Direction::Decode);
        let sizes = random_sizes(&mut rng, whole.len());
        let decoded = run_with_sizes(&mut decoder, &whole, &sizes).unwrap();
        assert_eq!(input, decoded, "len {} sizes {:?}", len, sizes);
    }
}

#[test]
fn hex_roundtrip_random_chunkings() {
    for _ in 0..20 {
        roundtrip_random_chunked(Hex::new, 64);
    }
}

#[test]
fn base64_roundtrip_random_chunkings() {
    for _ in 0..20 {
        roundtrip_random_chunked(Base64::new, 64);
    }
}

#[test]
fn reused_filter_matches_fresh_filter() {
    let mut rng = rand::thread_rng();
    let mut reused = Base64::new(Direction::Encode);

    for len in 0..48 {
        let input: Vec<u8> = (0..len).map(|_| rng.gen::<u8>()).collect();

        let mut fresh = Base64::new(Direction::Encode);
        let expected = fresh.encode(&input).unwrap();

        reused.clear();
        let mut out = reused.update(&input).unwrap();
        out.extend(reused.finalize().unwrap());
        assert_eq!(expected, out, "len {}", len);
    }
}
