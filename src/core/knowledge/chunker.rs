//! Fixed-size overlapping text chunking.
//!
//! Chunk size and overlap are explicit parameters, never derived from
//! content. The stride is `chunk_size - chunk_overlap`, so no region is
//! covered more than twice.

/// A chunk boundary produced by the splitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    /// Character offset of the span within the source text.
    pub offset: usize,
    pub text: String,
}

/// Split `text` into spans of at most `chunk_size` characters with
/// `chunk_overlap` characters shared between neighbours.
///
/// The overlap is clamped below the chunk size so the stride stays
/// positive. Whitespace-only spans are dropped.
pub fn split_text(text: &str, chunk_size: usize, chunk_overlap: usize) -> Vec<TextSpan> {
    let chunk_size = chunk_size.max(1);
    let chunk_overlap = chunk_overlap.min(chunk_size - 1);
    let stride = chunk_size - chunk_overlap;

    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        let end = (start + chunk_size).min(chars.len());
        let chunk: String = chars[start..end].iter().collect();
        if !chunk.trim().is_empty() {
            spans.push(TextSpan {
                offset: start,
                text: chunk,
            });
        }
        if end == chars.len() {
            break;
        }
        start += stride;
    }

    spans
}
