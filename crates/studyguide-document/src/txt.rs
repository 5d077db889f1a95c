/// Decode plain text, replacing invalid UTF-8 sequences.
pub fn extract_txt(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
