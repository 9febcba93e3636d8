use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]+").unwrap();
}

fn char_len(a: &str, b: &str) -> usize {
    a.chars().count() + b.chars().count()
}

fn flush(chunks: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
    current.clear();
}

/// Split `text` into pieces the translation API accepts. Short lines are
/// packed together; a line longer than `max_len` is broken on sentence ends.
/// A single sentence longer than `max_len` is still sent whole.
pub fn split_text_into_chunks(text: &str, max_len: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.split('\n') {
        if line.chars().count() > max_len {
            for sentence in SENTENCE_END.split(line).filter(|s| !s.is_empty()) {
                if char_len(&current, sentence) >= max_len {
                    flush(&mut chunks, &mut current);
                }
                current.push_str(sentence);
                current.push_str(". ");
            }
        } else {
            if char_len(&current, line) >= max_len {
                flush(&mut chunks, &mut current);
            }
            current.push_str(line);
            current.push('\n');
        }
    }
    flush(&mut chunks, &mut current);
    chunks
}
