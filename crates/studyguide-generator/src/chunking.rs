//! Paragraph-packing text chunker

/// Splits document text into chunks bounded by a character budget
///
/// The text is split on `'\n'` and paragraphs are packed greedily. A
/// paragraph is appended (with its newline) while the chunk stays strictly
/// below the budget; otherwise the current chunk is closed and the paragraph
/// starts a new one. Paragraphs are never split, so a paragraph that alone
/// reaches the budget becomes a chunk of its own.
///
/// Lengths are counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use studyguide_generator::TextChunker;
///
/// let chunks = TextChunker::new(12).chunk("alpha\nbeta\ngamma");
/// assert_eq!(chunks, vec!["alpha\nbeta\n", "gamma\n"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextChunker {
    max_chunk_size: usize,
}

impl TextChunker {
    /// Create a new text chunker
    pub fn new(max_chunk_size: usize) -> Self {
        Self { max_chunk_size }
    }

    /// The character budget
    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }

    /// Chunk the given text
    ///
    /// Concatenating the result yields `text` followed by one `'\n'`. Empty
    /// input yields no chunks, and no chunk is ever empty.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for paragraph in text.split('\n') {
            let paragraph_len = paragraph.chars().count();

            if current_len + paragraph_len + 1 >= self.max_chunk_size && !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }

            current.push_str(paragraph);
            current.push('\n');
            current_len += paragraph_len + 1;
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }
}

/// Chunk `text` with a budget of `max_chunk_size` characters
pub fn chunk_text(text: &str, max_chunk_size: usize) -> Vec<String> {
    TextChunker::new(max_chunk_size).chunk(text)
}
