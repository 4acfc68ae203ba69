use crate::CodecError;

/// The direction a text filter operates in.
///
/// A filter configured with [`Direction::Encode`] turns raw bytes into their
/// textual representation; [`Direction::Decode`] turns that text back into
/// the raw bytes. The direction is fixed for a processing session and only
/// changes through [`TextFilter::setup`], which also resets all carry state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Raw bytes in, text out.
    #[default]
    Encode,
    /// Text in, raw bytes out.
    Decode,
}

/// The incremental transform contract shared by every codec.
///
/// The call sequence is: construction or [`clear`](Filter::clear), zero or
/// more [`update`](Filter::update) calls, then exactly one
/// [`finalize`](Filter::finalize). Calling `update` after `finalize`
/// implicitly clears the filter and starts a new session with the same
/// direction. A second `finalize` returns empty output successfully.
///
/// `update` and `finalize` return the translated bytes directly, or the
/// error that failed the call; [`ok`](Filter::ok) mirrors the outcome of the
/// most recently completed call for callers that prefer a pull-based status
/// check.
pub trait Filter {
    /// Process more data, returning the corresponding encoded or decoded
    /// representation.
    ///
    /// Input that does not complete a group is held as carry state for the
    /// next call, so chunk boundaries never affect the concatenated output.
    ///
    /// # Errors
    ///
    /// If any input byte is invalid for the configured direction the whole
    /// call fails: no output is returned and the carry state is left exactly
    /// as it was before the call.
    fn update(&mut self, input: &[u8]) -> Result<Vec<u8>, CodecError>;

    /// Complete the session, returning any remaining output (base64 padding,
    /// for example) and validating that the input ended on a group boundary.
    ///
    /// # Errors
    ///
    /// Fails with [`CodecError::InvalidLength`] if carry state holds a
    /// partial group that cannot be completed.
    fn finalize(&mut self) -> Result<Vec<u8>, CodecError>;

    /// Whether the previous `update` or `finalize` call succeeded.
    ///
    /// This reflects exactly the most recent call, not a cumulative flag;
    /// a successful call after a failed one reports `true`.
    fn ok(&self) -> bool;

    /// Reset all carry state and the success flag, keeping the direction.
    ///
    /// A cleared filter behaves identically to a freshly constructed one.
    fn clear(&mut self);
}

/// A [`Filter`] with a configurable [`Direction`] and whole-buffer and
/// string-typed convenience operations layered on top of the incremental
/// contract.
///
/// The string surface assumes the filter's text side is ASCII (true for both
/// hex and base64), so encoded output always converts to a `String`
/// losslessly; decoding to a `String` fails cleanly with
/// [`CodecError::Utf8`] when the raw bytes are not valid UTF-8.
pub trait TextFilter: Filter {
    /// The direction this filter currently operates in.
    fn direction(&self) -> Direction;

    /// Reset the filter to the given direction, clearing all state.
    ///
    /// Equivalent to constructing a new filter with `dir`.
    fn setup(&mut self, dir: Direction);

    /// Encode the whole input in one shot.
    ///
    /// Resets the filter into [`Direction::Encode`], runs one `update` and
    /// one `finalize`, and returns the concatenated output.
    fn encode(&mut self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        self.setup(Direction::Encode);
        let mut out = self.update(input)?;
        out.extend_from_slice(&self.finalize()?);
        Ok(out)
    }

    /// Decode the whole input in one shot.
    ///
    /// Resets the filter into [`Direction::Decode`], runs one `update` and
    /// one `finalize`, and returns the concatenated output.
    fn decode(&mut self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        self.setup(Direction::Decode);
        let mut out = self.update(input)?;
        out.extend_from_slice(&self.finalize()?);
        Ok(out)
    }

    /// Like [`encode`](TextFilter::encode), but returns the text as a
    /// `String`.
    fn array_to_string(&mut self, input: &[u8]) -> Result<String, CodecError> {
        let out = self.encode(input)?;
        String::from_utf8(out).map_err(CodecError::from)
    }

    /// Like [`decode`](TextFilter::decode), but takes the text as a `&str`.
    fn string_to_array(&mut self, input: &str) -> Result<Vec<u8>, CodecError> {
        self.decode(input.as_bytes())
    }

    /// Encode a string's UTF-8 bytes, returning the text as a `String`.
    fn encode_string(&mut self, input: &str) -> Result<String, CodecError> {
        self.array_to_string(input.as_bytes())
    }

    /// Decode text to bytes and convert those bytes to a `String`.
    ///
    /// # Errors
    ///
    /// In addition to decode failures, fails with [`CodecError::Utf8`] if
    /// the decoded bytes are not valid UTF-8.
    fn decode_string(&mut self, input: &str) -> Result<String, CodecError> {
        let out = self.string_to_array(input)?;
        String::from_utf8(out).map_err(CodecError::from)
    }
}
