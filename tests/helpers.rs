use textfilter::{CodecError, Filter};

/// Drive `filter` over `input` in chunks of `chunk_len` bytes, then
/// `finalize`, returning all concatenated output.
pub fn run_in_chunks<F: Filter>(
    filter: &mut F,
    input: &[u8],
    chunk_len: usize,
) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    for chunk in input.chunks(chunk_len.max(1)) {
        out.extend(filter.update(chunk)?);
        assert!(filter.ok());
    }
    out.extend(filter.finalize()?);
    assert!(filter.ok());
    Ok(out)
}

/// Like `run_in_chunks`, but with explicit chunk sizes; any remainder after
/// the listed sizes goes in one last call.
pub fn run_with_sizes<F: Filter>(
    filter: &mut F,
    input: &[u8],
    sizes: &[usize],
) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    let mut rest = input;
    for &size in sizes {
        let take = size.min(rest.len());
        out.extend(filter.update(&rest[..take])?);
        rest = &rest[take..];
    }
    out.extend(filter.update(rest)?);
    out.extend(filter.finalize()?);
    Ok(out)
}
