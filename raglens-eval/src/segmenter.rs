//! Sentence segmentation for generated answers.

use raglens_core::types::AnswerSentence;

/// Split text into sentences on whitespace that follows a terminal
/// punctuation mark (`.`, `!`, `?`).
///
/// Each sentence is trimmed and empty results are dropped. Text with no
/// terminal punctuation comes back as a single trimmed sentence; empty
/// input produces an empty vector. A run of terminal punctuation (`"..."`,
/// `"?!"`) stays attached to its sentence, and punctuation not followed by
/// whitespace (`"3.5"`, `"e.g.x"`) does not end a sentence.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            while let Some(&next) = chars.peek() {
                if matches!(next, '.' | '!' | '?') {
                    current.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            // Boundary only when the punctuation run is followed by
            // whitespace or the end of the text.
            if chars.peek().is_none_or(|next| next.is_whitespace()) {
                push_trimmed(&mut sentences, &mut current);
            }
        }
    }
    push_trimmed(&mut sentences, &mut current);

    sentences
}

/// Split text into sentences carrying their 0-based ordinal position.
///
/// Same segmentation rules as [`split_sentences`].
#[must_use]
pub fn number_sentences(text: &str) -> Vec<AnswerSentence> {
    split_sentences(text)
        .into_iter()
        .enumerate()
        .map(|(index, sentence)| AnswerSentence::new(index, sentence))
        .collect()
}

fn push_trimmed(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}
