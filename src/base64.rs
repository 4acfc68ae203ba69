//! Base64 encoding and decoding, standard alphabet with `=` padding.
//!
//! [`Base64`] is the incremental filter; [`encode`] and [`decode`] are
//! one-shot conveniences for when the whole input is already in hand.

use crate::filter::{Direction, Filter, TextFilter};
use crate::{tables, CodecError};

/// Bytes skipped during decoding rather than rejected.
const WHITESPACE: &[u8] = b" \n\t\r\x0c";

const PAD_BYTE: u8 = b'=';

/// Encode arbitrary bytes as base64.
///
/// # Example
///
/// ```
/// assert_eq!("aGVsbG8gd29ybGQ=", textfilter::base64::encode(b"hello world"));
/// ```
pub fn encode<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    let bytes = input.as_ref();
    let rem = bytes.len() % 3;
    let mut out = Vec::with_capacity(bytes.len() / 3 * 4 + 4);
    encode_triples(&bytes[..bytes.len() - rem], &mut out);
    encode_tail(&bytes[bytes.len() - rem..], &mut out);
    String::from_utf8(out).expect("base64 output is always ASCII")
}

/// Decode base64 text to bytes, skipping ASCII whitespace.
///
/// # Example
///
/// ```
/// let bytes = textfilter::base64::decode("aGVsbG8gd29ybGQ=").unwrap();
/// assert_eq!(b"hello world", &bytes[..]);
/// ```
///
/// # Errors
///
/// Fails on bytes outside the alphabet, misplaced `=`, and input whose
/// length (ignoring whitespace) is not a multiple of 4.
pub fn decode<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>, CodecError> {
    Base64::new(Direction::Decode).decode(input.as_ref())
}

/// Encode complete 3-byte groups. `input` length must be a multiple of 3.
fn encode_triples(input: &[u8], out: &mut Vec<u8>) {
    debug_assert_eq!(0, input.len() % 3);
    for chunk in input.chunks_exact(3) {
        out.push(tables::B64_ENCODE[(chunk[0] >> 2) as usize]);
        out.push(tables::B64_ENCODE[((chunk[0] << 4 | chunk[1] >> 4) & 0x3F) as usize]);
        out.push(tables::B64_ENCODE[((chunk[1] << 2 | chunk[2] >> 6) & 0x3F) as usize]);
        out.push(tables::B64_ENCODE[(chunk[2] & 0x3F) as usize]);
    }
}

/// Encode a final group of 0-2 leftover bytes, with padding.
fn encode_tail(tail: &[u8], out: &mut Vec<u8>) {
    match *tail {
        [] => {}
        [b0] => {
            out.push(tables::B64_ENCODE[(b0 >> 2) as usize]);
            out.push(tables::B64_ENCODE[((b0 << 4) & 0x3F) as usize]);
            out.push(PAD_BYTE);
            out.push(PAD_BYTE);
        }
        [b0, b1] => {
            out.push(tables::B64_ENCODE[(b0 >> 2) as usize]);
            out.push(tables::B64_ENCODE[((b0 << 4 | b1 >> 4) & 0x3F) as usize]);
            out.push(tables::B64_ENCODE[((b1 << 2) & 0x3F) as usize]);
            out.push(PAD_BYTE);
        }
        _ => unreachable!("tail is at most 2 bytes"),
    }
}

/// Incremental base64 encoder/decoder.
///
/// Encoding buffers input until a 3-byte group is complete, then emits 4
/// characters; [`finalize`](Filter::finalize) pads a trailing 1- or 2-byte
/// group with `==` or `=`. Decoding accumulates 4-character groups, emitting
/// 3 bytes each, and skips ASCII whitespace; `=` is only accepted in the
/// trailing one or two positions of the final group, and input after a
/// padded group fails. An incomplete group at `finalize` is rejected.
///
/// # Example
///
/// ```
/// use textfilter::{Base64, Direction, Filter};
///
/// let mut b64 = Base64::new(Direction::Encode);
/// let mut out = b64.update(b"he").unwrap();
/// out.extend(b64.update(b"llo").unwrap());
/// out.extend(b64.finalize().unwrap());
/// assert_eq!(b"aGVsbG8=", &out[..]);
/// ```
#[derive(Clone, Debug)]
pub struct Base64 {
    dir: Direction,
    /// Carry: 0-2 raw bytes when encoding, 0-3 text characters (possibly
    /// including a trailing `=`) when decoding.
    partial: [u8; 4],
    partial_len: usize,
    /// Set once a padded group has been decoded; only whitespace may follow.
    pad_done: bool,
    ok: bool,
    finished: bool,
    /// Bytes consumed this session, for error offsets.
    offset: usize,
}

impl Base64 {
    /// Create a base64 filter operating in the given direction.
    pub fn new(dir: Direction) -> Base64 {
        Base64 {
            dir,
            partial: [0; 4],
            partial_len: 0,
            pad_done: false,
            ok: true,
            finished: false,
            offset: 0,
        }
    }

    fn update_encode(&mut self, input: &[u8]) -> Vec<u8> {
        let mut input = input;
        let mut out = Vec::with_capacity((self.partial_len + input.len()) / 3 * 4 + 4);

        // top up the carried group first
        if self.partial_len > 0 {
            let take = (3 - self.partial_len).min(input.len());
            self.partial[self.partial_len..self.partial_len + take]
                .copy_from_slice(&input[..take]);
            self.partial_len += take;
            input = &input[take..];

            if self.partial_len < 3 {
                return out;
            }
            let group = [self.partial[0], self.partial[1], self.partial[2]];
            encode_triples(&group, &mut out);
            self.partial_len = 0;
        }

        let rem = input.len() % 3;
        encode_triples(&input[..input.len() - rem], &mut out);

        // stash leftover bytes
        self.partial[..rem].copy_from_slice(&input[input.len() - rem..]);
        self.partial_len = rem;

        out
    }

    fn update_decode(&mut self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        // Work on copies so a failed call leaves the carry untouched.
        let mut partial = self.partial;
        let mut partial_len = self.partial_len;
        let mut pad_done = self.pad_done;
        let mut out = Vec::with_capacity(input.len() / 4 * 3 + 3);

        for (i, &b) in input.iter().enumerate() {
            if WHITESPACE.contains(&b) {
                continue;
            }
            if pad_done {
                // a padded group ends the stream
                return Err(CodecError::InvalidByte(self.offset + i, b));
            }
            if b == PAD_BYTE {
                if partial_len < 2 {
                    return Err(CodecError::InvalidPadding(self.offset + i));
                }
            } else {
                if partial_len > 0 && partial[partial_len - 1] == PAD_BYTE {
                    // data after `=` within the group
                    return Err(CodecError::InvalidPadding(self.offset + i));
                }
                if tables::B64_DECODE[b as usize] == tables::INVALID_VALUE {
                    return Err(CodecError::InvalidByte(self.offset + i, b));
                }
            }

            partial[partial_len] = b;
            partial_len += 1;
            if partial_len == 4 {
                pad_done = decode_quad(&partial, &mut out);
                partial_len = 0;
            }
        }

        self.partial = partial;
        self.partial_len = partial_len;
        self.pad_done = pad_done;
        Ok(out)
    }
}

/// Decode one complete group of 4 pre-validated characters, returning true
/// if the group was padded (and therefore final).
fn decode_quad(quad: &[u8; 4], out: &mut Vec<u8>) -> bool {
    let pads = quad.iter().filter(|&&b| b == PAD_BYTE).count();
    let m0 = tables::B64_DECODE[quad[0] as usize];
    let m1 = tables::B64_DECODE[quad[1] as usize];
    out.push(m0 << 2 | m1 >> 4);
    if pads < 2 {
        let m2 = tables::B64_DECODE[quad[2] as usize];
        out.push(m1 << 4 | m2 >> 2);
        if pads < 1 {
            let m3 = tables::B64_DECODE[quad[3] as usize];
            out.push(m2 << 6 | m3);
        }
    }
    pads > 0
}

impl Default for Base64 {
    /// An encoding base64 filter.
    fn default() -> Base64 {
        Base64::new(Direction::default())
    }
}

impl Filter for Base64 {
    fn update(&mut self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        if self.finished {
            self.clear();
        }

        let out = match self.dir {
            Direction::Encode => self.update_encode(input),
            Direction::Decode => match self.update_decode(input) {
                Ok(out) => out,
                Err(err) => {
                    self.ok = false;
                    return Err(err);
                }
            },
        };

        self.offset += input.len();
        self.ok = true;
        Ok(out)
    }

    fn finalize(&mut self) -> Result<Vec<u8>, CodecError> {
        self.finished = true;
        match self.dir {
            Direction::Encode => {
                let mut out = Vec::with_capacity(4);
                encode_tail(&self.partial[..self.partial_len], &mut out);
                self.partial_len = 0;
                self.ok = true;
                Ok(out)
            }
            Direction::Decode => {
                if self.partial_len != 0 {
                    self.ok = false;
                    return Err(CodecError::InvalidLength);
                }
                self.ok = true;
                Ok(Vec::new())
            }
        }
    }

    fn ok(&self) -> bool {
        self.ok
    }

    fn clear(&mut self) {
        self.partial = [0; 4];
        self.partial_len = 0;
        self.pad_done = false;
        self.ok = true;
        self.finished = false;
        self.offset = 0;
    }
}

impl TextFilter for Base64 {
    fn direction(&self) -> Direction {
        self.dir
    }

    fn setup(&mut self, dir: Direction) {
        self.dir = dir;
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_padding_lengths() {
        assert_eq!("YQ==", encode(b"a"));
        assert_eq!("YWI=", encode(b"ab"));
        assert_eq!("YWJj", encode(b"abc"));
    }

    #[test]
    fn decode_padding_lengths() {
        assert_eq!(b"a".to_vec(), decode("YQ==").unwrap());
        assert_eq!(b"ab".to_vec(), decode("YWI=").unwrap());
        assert_eq!(b"abc".to_vec(), decode("YWJj").unwrap());
    }

    #[test]
    fn decode_misplaced_padding() {
        assert_eq!(Err(CodecError::InvalidPadding(1)), decode("Y=Qg"));
        assert_eq!(Err(CodecError::InvalidPadding(0)), decode("="));
    }

    #[test]
    fn decode_data_after_pad_in_group() {
        // `=` at position 2 must be followed by `=`, not data
        assert_eq!(Err(CodecError::InvalidPadding(3)), decode("YQ=g"));
    }

    #[test]
    fn decode_rejects_input_after_padded_group() {
        assert_eq!(Err(CodecError::InvalidByte(4, b'Y')), decode("YWI=YWJj"));
    }

    #[test]
    fn decode_skips_whitespace() {
        assert_eq!(b"hello world".to_vec(), decode("aGVs\nbG8g\td29y bGQ=\r\n").unwrap());
    }

    #[test]
    fn decode_incomplete_group_fails_at_finalize() {
        let mut b64 = Base64::new(Direction::Decode);
        assert_eq!(b"abc".to_vec(), b64.update(b"YWJjYQ").unwrap());
        assert!(b64.ok());
        assert_eq!(Err(CodecError::InvalidLength), b64.finalize());
        assert!(!b64.ok());
    }

    #[test]
    fn failed_update_freezes_carry() {
        let mut b64 = Base64::new(Direction::Decode);
        assert!(b64.update(b"YW").unwrap().is_empty());
        assert_eq!(Err(CodecError::InvalidByte(3, b'!')), b64.update(b"J!"));
        // the two carried characters must still complete with the rest
        assert_eq!(b"abc".to_vec(), b64.update(b"Jj").unwrap());
        assert!(b64.finalize().is_ok());
    }

    #[test]
    fn padding_split_across_updates() {
        let mut b64 = Base64::new(Direction::Decode);
        let mut out = b64.update(b"YWI").unwrap();
        out.extend(b64.update(b"=").unwrap());
        out.extend(b64.finalize().unwrap());
        assert_eq!(b"ab".to_vec(), out);
    }

    #[test]
    fn encode_carry_across_updates() {
        let mut b64 = Base64::new(Direction::Encode);
        let mut out = b64.update(b"a").unwrap();
        assert!(out.is_empty());
        out.extend(b64.update(b"b").unwrap());
        out.extend(b64.update(b"cd").unwrap());
        out.extend(b64.finalize().unwrap());
        assert_eq!(b"YWJjZA==", &out[..]);
    }
}
