use crate::ExtractionError;
use std::panic;

/// Extract the full text of a PDF.
///
/// `pdf-extract` returns the whole document as one string; pages are not
/// separated in the output.
pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract panics on some malformed fonts and cross-reference tables
    let result = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| ExtractionError::Pdf("parser panicked on malformed input".to_string()))?;

    let text = result.map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    // Form feeds separate pages in pdf-extract output
    Ok(text.replace('\u{000C}', "\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage() {
        let err = extract_pdf(b"%PDF-garbage").unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }
}
