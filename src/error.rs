use std::{error, fmt, string};

/// Errors that can occur while decoding or while converting filter output to
/// a `String`.
///
/// Offsets are cumulative over a filter session: they count bytes consumed by
/// every `update` call since construction or the last `clear`, so an error in
/// the third chunk reports its position in the overall stream, not within
/// that chunk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// A byte outside the codec's alphabet was found in the input. The offset
    /// and the offending byte are provided.
    InvalidByte(usize, u8),
    /// The input ended mid-group: an odd number of hex digits, or a base64
    /// quantum that is not a multiple of 4 characters.
    InvalidLength,
    /// A base64 `=` appeared somewhere other than the trailing one or two
    /// positions of the final group. The offset is that of the byte which
    /// revealed the misplacement.
    InvalidPadding(usize),
    /// Decoded bytes could not be represented as a UTF-8 string.
    Utf8(string::FromUtf8Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CodecError::InvalidByte(offset, byte) => {
                write!(f, "Invalid byte {}, offset {}.", byte, offset)
            }
            CodecError::InvalidLength => write!(f, "Encoded text ends with a partial group."),
            CodecError::InvalidPadding(offset) => {
                write!(f, "Misplaced padding at offset {}.", offset)
            }
            CodecError::Utf8(ref err) => err.fmt(f),
        }
    }
}

impl error::Error for CodecError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            CodecError::Utf8(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<string::FromUtf8Error> for CodecError {
    fn from(err: string::FromUtf8Error) -> CodecError {
        CodecError::Utf8(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offset() {
        assert_eq!(
            "Invalid byte 33, offset 7.",
            CodecError::InvalidByte(7, b'!').to_string()
        );
        assert_eq!(
            "Misplaced padding at offset 2.",
            CodecError::InvalidPadding(2).to_string()
        );
    }
}
