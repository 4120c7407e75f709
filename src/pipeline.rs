//! Reference model of the backend's text pipeline.
//!
//! The relay treats the backend as a black box, but its contract is a
//! three-stage pipeline: chunk the transcript, filter the chunks, generate
//! a post per chunk. These pure functions document that contract and back
//! the integration tests; they are composed sequentially with no artificial
//! latency.

/// Split text into chunks on newlines, dropping whitespace-only lines.
pub fn chunk_text(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Keep chunks with more than 10 characters.
pub fn filter_chunks(chunks: Vec<String>) -> Vec<String> {
    chunks
        .into_iter()
        .filter(|chunk| chunk.chars().count() > 10)
        .collect()
}

/// Generate one post per chunk from its first 50 characters.
pub fn generate_posts(chunks: &[String]) -> Vec<String> {
    chunks
        .iter()
        .map(|chunk| {
            let preview: String = chunk.chars().take(50).collect();
            format!("Generated post for: {preview}...")
        })
        .collect()
}

/// The full pipeline: chunk, filter, generate.
pub fn process_text(text: &str) -> Vec<String> {
    let chunks = chunk_text(text);
    let filtered = filter_chunks(chunks);
    generate_posts(&filtered)
}
