//! Standalone HTML export of a study guide.
//!
//! The page has three tabs. The flashcard tab is a click-to-flip card with
//! Previous/Next buttons and an "i / K" counter; its deck is embedded as JSON.

use crate::error::Result;
use serde_json::json;
use std::fs;
use std::path::Path;
use studyguide_domain::ArtifactKind;
use studyguide_generator::{FlashcardPanel, StudyGuide};

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Study Guide: __TITLE__</title>
<style>
  body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; max-width: 860px; margin: 2rem auto; padding: 0 1rem; color: #222; }
  h1 { font-size: 1.6rem; }
  .meta { color: #666; margin-bottom: 1.5rem; }
  .tabs { display: flex; gap: 0.5rem; border-bottom: 1px solid #ddd; }
  .tab { background: none; border: none; padding: 0.6rem 1rem; cursor: pointer; font-size: 1rem; color: #555; }
  .tab.active { border-bottom: 3px solid #007bff; color: #007bff; }
  .panel { display: none; padding: 1rem 0; white-space: pre-wrap; line-height: 1.5; }
  .panel.active { display: block; }
  .warning { background: #fff4e5; border: 1px solid #ffb74d; padding: 0.6rem 1rem; border-radius: 5px; white-space: normal; }
  .flashcard-container { display: flex; flex-direction: column; align-items: center; white-space: normal; }
  .scene { width: 100%; max-width: 500px; height: 280px; perspective: 600px; margin-bottom: 1rem; }
  .card { width: 100%; height: 100%; position: relative; cursor: pointer; transition: transform 0.8s; transform-style: preserve-3d; border-radius: 20px; box-shadow: 0 4px 15px rgba(0,0,0,0.1); }
  .card.is-flipped { transform: rotateY(180deg); }
  .card__face { position: absolute; width: 100%; height: 100%; backface-visibility: hidden; display: flex; justify-content: center; align-items: center; padding: 20px; box-sizing: border-box; border-radius: 20px; text-align: center; border: 1px solid #ddd; }
  .card__face--front { background: white; font-weight: bold; font-size: 1.5rem; color: #333; }
  .card__face--back { background: #f0f2f6; transform: rotateY(180deg); font-size: 1.1rem; color: #555; }
  .navigation { display: flex; justify-content: space-between; align-items: center; width: 100%; max-width: 500px; }
  .nav-button { background-color: #007bff; color: white; border: none; padding: 10px 20px; border-radius: 5px; cursor: pointer; font-size: 1rem; }
  .nav-button:hover { background-color: #0056b3; }
  .nav-button:disabled { background-color: #cccccc; cursor: not-allowed; }
  #card-counter { color: #666; }
</style>
</head>
<body>
<h1>Study Guide: __TITLE__</h1>
<div class="meta">Difficulty: __DIFFICULTY__</div>
<div class="tabs">
  <button class="tab active" data-panel="summary">__SUMMARY_TITLE__</button>
  <button class="tab" data-panel="qa">__QA_TITLE__</button>
  <button class="tab" data-panel="flashcards">__FLASHCARDS_TITLE__</button>
</div>
<div class="panel active" id="summary">__SUMMARY__</div>
<div class="panel" id="qa">__QA__</div>
<div class="panel" id="flashcards">__FLASHCARDS__</div>
<script>
  document.querySelectorAll('.tab').forEach(function (tab) {
    tab.addEventListener('click', function () {
      document.querySelectorAll('.tab, .panel').forEach(function (el) { el.classList.remove('active'); });
      tab.classList.add('active');
      document.getElementById(tab.dataset.panel).classList.add('active');
    });
  });

  const flashcards = __DECK__;
  let currentIndex = 0;
  const card = document.getElementById('flashcard');
  if (card && flashcards.length > 0) {
    const front = document.getElementById('card-front');
    const back = document.getElementById('card-back');
    const prevBtn = document.getElementById('prevBtn');
    const nextBtn = document.getElementById('nextBtn');
    const counter = document.getElementById('card-counter');

    function showCard(index) {
      card.classList.remove('is-flipped');
      front.textContent = flashcards[index].term;
      back.textContent = flashcards[index].definition;
      counter.textContent = (index + 1) + ' / ' + flashcards.length;
      prevBtn.disabled = index === 0;
      nextBtn.disabled = index === flashcards.length - 1;
    }

    card.addEventListener('click', function () { card.classList.toggle('is-flipped'); });
    prevBtn.addEventListener('click', function () {
      if (currentIndex > 0) { currentIndex--; showCard(currentIndex); }
    });
    nextBtn.addEventListener('click', function () {
      if (currentIndex < flashcards.length - 1) { currentIndex++; showCard(currentIndex); }
    });
    showCard(currentIndex);
  }
</script>
</body>
</html>
"#;

const VIEWER: &str = r#"<div class="flashcard-container">
  <div class="scene">
    <div class="card" id="flashcard">
      <div class="card__face card__face--front" id="card-front"></div>
      <div class="card__face card__face--back" id="card-back"></div>
    </div>
  </div>
  <div class="navigation">
    <button class="nav-button" id="prevBtn">Previous</button>
    <span id="card-counter"></span>
    <button class="nav-button" id="nextBtn">Next</button>
  </div>
</div>"#;

/// Escape text for use inside HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the deck as a JavaScript literal that is safe inside `<script>`.
fn deck_literal(guide: &StudyGuide) -> String {
    let cards: Vec<_> = guide
        .flashcards
        .deck()
        .iter()
        .map(|c| json!({ "term": c.term, "definition": c.definition }))
        .collect();

    // serde_json never emits a raw '<' outside strings, so this keeps "</script>" out of the page
    serde_json::Value::Array(cards)
        .to_string()
        .replace('<', "\\u003c")
}

/// Render the whole study guide as a standalone HTML page.
pub fn render(guide: &StudyGuide) -> String {
    let title = escape_html(guide.source.as_deref().unwrap_or("Document"));

    let flashcards = match &guide.flashcards {
        FlashcardPanel::Deck(_) => VIEWER.to_string(),
        FlashcardPanel::Raw { text } => format!(
            "<div class=\"warning\">{}</div>\n{}",
            "Could not parse flashcards from the generated text. Showing raw output.",
            escape_html(text.trim_end())
        ),
    };

    let summary = escape_html(guide.summary.text.trim_end());
    let qa = escape_html(guide.qa.text.trim_end());
    let qa_title = escape_html(ArtifactKind::Qa.title());
    let deck = deck_literal(guide);

    fill(
        PAGE,
        &[
            ("__TITLE__", title.as_str()),
            ("__DIFFICULTY__", guide.difficulty.label()),
            ("__SUMMARY_TITLE__", ArtifactKind::Summary.title()),
            ("__QA_TITLE__", qa_title.as_str()),
            ("__FLASHCARDS_TITLE__", ArtifactKind::Flashcards.title()),
            ("__SUMMARY__", summary.as_str()),
            ("__QA__", qa.as_str()),
            ("__FLASHCARDS__", flashcards.as_str()),
            ("__DECK__", deck.as_str()),
        ],
    )
}

/// Substitute `__KEY__` placeholders in one pass; inserted values are never rescanned.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("__") {
        match values.iter().find(|(key, _)| rest[start..].starts_with(key)) {
            Some((key, value)) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &rest[start + key.len()..];
            }
            None => {
                out.push_str(&rest[..start + 2]);
                rest = &rest[start + 2..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Write the HTML study guide to `path`.
pub fn write(guide: &StudyGuide, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render(guide))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyguide_domain::{Difficulty, Flashcard};
    use studyguide_generator::GeneratedArtifact;
    use tempfile::TempDir;

    fn artifact(kind: ArtifactKind, text: &str) -> GeneratedArtifact {
        GeneratedArtifact {
            kind,
            difficulty: Difficulty::Beginner,
            text: text.to_string(),
            chunk_count: 1,
            failures: Vec::new(),
        }
    }

    fn guide(flashcards: FlashcardPanel) -> StudyGuide {
        StudyGuide {
            source: Some("notes <draft>.txt".to_string()),
            difficulty: Difficulty::Beginner,
            summary: artifact(ArtifactKind::Summary, "Use <b>bold</b> & more\n\n"),
            qa: artifact(ArtifactKind::Qa, "Q: 1 < 2?\nA: Yes\n\n"),
            flashcards_raw: artifact(ArtifactKind::Flashcards, "raw\n\n"),
            flashcards,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_render_escapes_generated_text() {
        let page = render(&guide(FlashcardPanel::Deck(vec![
            Flashcard::new("Tag", "Ends with </script>").unwrap(),
        ])));

        assert!(page.contains("Study Guide: notes &lt;draft&gt;.txt"));
        assert!(page.contains("Use &lt;b&gt;bold&lt;/b&gt; &amp; more"));
        assert!(page.contains("Q: 1 &lt; 2?"));
        assert!(page.contains(r#""definition":"Ends with \u003c/script>""#));
        assert_eq!(page.matches("</script>").count(), 1);
        assert!(page.contains("id=\"prevBtn\""));
        assert!(!page.contains("__DECK__"));
        assert!(!page.contains("__TITLE__"));
    }

    #[test]
    fn test_fill_does_not_rescan_values() {
        let out = fill("a __X__ b __Y__", &[("__X__", "__Y__"), ("__Y__", "y")]);
        assert_eq!(out, "a __Y__ b y");
        assert_eq!(fill("card__face", &[("__X__", "x")]), "card__face");
    }

    #[test]
    fn test_render_raw_fallback() {
        let page = render(&guide(FlashcardPanel::Raw { text: "nothing parsed".to_string() }));
        assert!(page.contains("Could not parse flashcards"));
        assert!(page.contains("nothing parsed"));
        assert!(page.contains("const flashcards = [];"));
        assert!(!page.contains("id=\"flashcard\""));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("guide.html");
        write(&guide(FlashcardPanel::Raw { text: String::new() }), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("<!DOCTYPE html>"));
    }
}
