// ABOUTME: Segmentation module for the text-slides application
// ABOUTME: Splits freeform text into slides and inserts explicit slide breaks

use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Reserved marker line separating slides explicitly.
/// There is no escaping: the marker can never appear as slide content.
pub const SLIDE_BREAK: &str = "==SLIDE BREAK==";

/// Default number of characters shown in a slide preview
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

/// Two or more consecutive line breaks mark an implicit slide boundary.
static BLANK_LINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Split text into an ordered list of slides.
///
/// The text is first split on [`SLIDE_BREAK`], then every chunk is split on
/// blank-line runs. Fragments are trimmed (whitespace and byte order marks)
/// and empty ones are dropped, so every returned slide is non-empty.
pub fn segment(text: &str) -> Vec<String> {
    let slides: Vec<String> = text
        .split(SLIDE_BREAK)
        .flat_map(|chunk| BLANK_LINE_RUN.split(chunk))
        .map(trim_fragment)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect();

    debug!("Segmented {} chars into {} slides", text.len(), slides.len());
    slides
}

// U+FEFF counts as whitespace when trimming, so a leading BOM never forms a slide
fn trim_fragment(fragment: &str) -> &str {
    fragment.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Join a slide list back into text, one delimiter line between slides.
///
/// Segmenting the result yields the same slide list again.
pub fn join_slides(slides: &[String]) -> String {
    slides.join(&format!("\n{}\n", SLIDE_BREAK))
}

/// Insert a slide break line at a cursor position.
///
/// `cursor` counts characters and is clamped to the end of the text.
/// Returns the new text and the cursor position right after the inserted
/// marker (the marker plus its two surrounding newlines).
pub fn insert_break(text: &str, cursor: usize) -> (String, usize) {
    let char_count = text.chars().count();
    let cursor = cursor.min(char_count);
    let split_at = text
        .char_indices()
        .nth(cursor)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(text.len());

    let (before, after) = text.split_at(split_at);
    let mut result = String::with_capacity(text.len() + SLIDE_BREAK.len() + 2);
    result.push_str(before);
    result.push('\n');
    result.push_str(SLIDE_BREAK);
    result.push('\n');
    result.push_str(after);

    let new_cursor = cursor + SLIDE_BREAK.chars().count() + 2;
    debug!("Inserted slide break at {}, cursor now {}", cursor, new_cursor);
    (result, new_cursor)
}

/// Shorten a slide for list display, appending "..." when it was cut.
pub fn preview(slide: &str, max_chars: usize) -> String {
    let mut chars = slide.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// One line of a numbered slide listing, with line breaks flattened
pub fn list_entry(number: usize, slide: &str, max_chars: usize) -> String {
    format!("{:>3}. {}", number, preview(slide, max_chars).replace('\n', " "))
}
