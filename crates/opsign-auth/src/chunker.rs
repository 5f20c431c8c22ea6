//! Splitting encoded signatures into header-sized chunks.
//!
//! A base64 RSA signature is too long for a single conventional header, so it
//! is spread across `X-Ops-Authorization-1..N`, each holding at most
//! [`AUTHORIZATION_CHUNK_WIDTH`] characters. Concatenating the chunks in
//! order restores the signature exactly.

/// Characters per `X-Ops-Authorization-N` header. Verifiers reassemble with
/// the same width, so this is a protocol constant.
pub const AUTHORIZATION_CHUNK_WIDTH: usize = 60;

/// Split an encoded signature into [`AUTHORIZATION_CHUNK_WIDTH`]-character chunks.
///
/// # Examples
///
/// ```
/// use opsign_auth::chunker::chunk_signature;
///
/// let signature = "A".repeat(130);
/// let chunks = chunk_signature(&signature);
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[2].len(), 10);
/// assert_eq!(chunks.concat(), signature);
/// ```
#[must_use]
pub fn chunk_signature(encoded: &str) -> Vec<&str> {
    split_chunks(encoded, AUTHORIZATION_CHUNK_WIDTH)
}

/// Number of chunks [`chunk_signature`] produces for an encoded length.
#[must_use]
pub fn chunk_count(encoded_len: usize) -> usize {
    encoded_len.div_ceil(AUTHORIZATION_CHUNK_WIDTH)
}

/// Split `input` into pieces of at most `width` characters.
///
/// A zero width is treated as one. An input whose length is an exact multiple
/// of `width` ends with a full chunk, never an empty one.
fn split_chunks(input: &str, width: usize) -> Vec<&str> {
    let width = width.max(1);
    let mut chunks = Vec::with_capacity(input.len().div_ceil(width));
    let mut rest = input;
    while !rest.is_empty() {
        let split = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(index, _)| index);
        let (head, tail) = rest.split_at(split);
        chunks.push(head);
        rest = tail;
    }
    chunks
}
