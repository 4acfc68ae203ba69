//! Hexadecimal encoding and decoding.
//!
//! [`Hex`] is the incremental filter; [`encode`] and [`decode`] are one-shot
//! conveniences for when the whole input is already in hand.

use crate::filter::{Direction, Filter, TextFilter};
use crate::{tables, CodecError};

/// Encode arbitrary bytes as lowercase hex.
///
/// # Example
///
/// ```
/// assert_eq!("666f6f", textfilter::hex::encode(b"foo"));
/// ```
pub fn encode<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    let bytes = input.as_ref();
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(char::from(tables::HEX_ENCODE[(b >> 4) as usize]));
        out.push(char::from(tables::HEX_ENCODE[(b & 0x0F) as usize]));
    }
    out
}

/// Decode hex text to bytes. Accepts both uppercase and lowercase digits.
///
/// # Example
///
/// ```
/// assert_eq!(vec![0x4A, 0xff], textfilter::hex::decode("4AfF").unwrap());
/// ```
///
/// # Errors
///
/// Fails on non-hex input bytes and on odd-length input.
pub fn decode<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>, CodecError> {
    Hex::new(Direction::Decode).decode(input.as_ref())
}

/// Incremental hex encoder/decoder.
///
/// Encoding maps each input byte to two output characters, high nibble
/// first, and can never fail or carry state between calls. Decoding consumes
/// digits two at a time, holding a lone trailing digit as carry until the
/// next [`update`](Filter::update); an odd number of digits overall is
/// rejected at [`finalize`](Filter::finalize).
///
/// # Example
///
/// ```
/// use textfilter::{Direction, Filter, Hex};
///
/// let mut hex = Hex::new(Direction::Decode);
/// let mut out = hex.update(b"4a6").unwrap();
/// out.extend(hex.update(b"2").unwrap());
/// out.extend(hex.finalize().unwrap());
/// assert_eq!(b"Jb", &out[..]);
/// ```
#[derive(Clone, Debug)]
pub struct Hex {
    dir: Direction,
    /// Pending decoded high nibble, valid when `partial` is set.
    val: u8,
    partial: bool,
    ok: bool,
    finished: bool,
    /// Bytes consumed this session, for error offsets.
    offset: usize,
}

impl Hex {
    /// Create a hex filter operating in the given direction.
    pub fn new(dir: Direction) -> Hex {
        Hex {
            dir,
            val: 0,
            partial: false,
            ok: true,
            finished: false,
            offset: 0,
        }
    }
}

impl Default for Hex {
    /// An encoding hex filter.
    fn default() -> Hex {
        Hex::new(Direction::default())
    }
}

impl Filter for Hex {
    fn update(&mut self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        if self.finished {
            self.clear();
        }

        let out = match self.dir {
            Direction::Encode => {
                let mut out = Vec::with_capacity(input.len() * 2);
                for &b in input {
                    out.push(tables::HEX_ENCODE[(b >> 4) as usize]);
                    out.push(tables::HEX_ENCODE[(b & 0x0F) as usize]);
                }
                out
            }
            Direction::Decode => {
                // Work on copies so a failed call leaves the carry untouched.
                let mut val = self.val;
                let mut partial = self.partial;
                let mut out = Vec::with_capacity(input.len() / 2 + 1);
                for (i, &b) in input.iter().enumerate() {
                    let nibble = tables::HEX_DECODE[b as usize];
                    if nibble == tables::INVALID_VALUE {
                        self.ok = false;
                        return Err(CodecError::InvalidByte(self.offset + i, b));
                    }
                    if partial {
                        out.push(val << 4 | nibble);
                        partial = false;
                    } else {
                        val = nibble;
                        partial = true;
                    }
                }
                self.val = val;
                self.partial = partial;
                out
            }
        };

        self.offset += input.len();
        self.ok = true;
        Ok(out)
    }

    fn finalize(&mut self) -> Result<Vec<u8>, CodecError> {
        self.finished = true;
        if self.dir == Direction::Decode && self.partial {
            self.ok = false;
            return Err(CodecError::InvalidLength);
        }
        self.ok = true;
        Ok(Vec::new())
    }

    fn ok(&self) -> bool {
        self.ok
    }

    fn clear(&mut self) {
        self.val = 0;
        self.partial = false;
        self.ok = true;
        self.finished = false;
        self.offset = 0;
    }
}

impl TextFilter for Hex {
    fn direction(&self) -> Direction {
        self.dir
    }

    fn setup(&mut self, dir: Direction) {
        self.dir = dir;
        self.clear();
    }
}
