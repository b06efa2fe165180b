use serde::Serialize;

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub(crate) struct TextStats {
    pub(crate) words: usize,
    pub(crate) characters: usize,
    pub(crate) characters_no_spaces: usize,
    pub(crate) paragraphs: usize,
}

/// Reverse by Unicode scalar value
pub(crate) fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

pub(crate) fn count(text: &str) -> TextStats {
    TextStats {
        words: text.split_whitespace().count(),
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        paragraphs: count_paragraphs(text),
    }
}

/// Runs of non-blank lines; any number of blank lines separates two paragraphs
fn count_paragraphs(text: &str) -> usize {
    let mut paragraphs = 0;
    let mut in_paragraph = false;
    for line in text.lines() {
        let blank = line.trim().is_empty();
        if !blank && !in_paragraph {
            paragraphs += 1;
        }
        in_paragraph = !blank;
    }
    paragraphs
}
