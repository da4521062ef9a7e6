/// Sørensen–Dice bigram overlap of two texts, case-insensitive, in `[0, 1]`.
pub fn lexical_similarity(summary: &str, text: &str) -> f32 {
    let score = strsim::sorensen_dice(&summary.to_lowercase(), &text.to_lowercase());
    (score as f32).clamp(0.0, 1.0)
}

/// The first `count` sentences of `text`, split after `.`, `!` or `?`
/// followed by whitespace.
pub fn first_sentences(text: &str, count: usize) -> String {
    if count == 0 {
        return String::new();
    }

    let mut seen = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = chars.peek().is_none_or(|(_, next)| next.is_whitespace());
        if at_boundary {
            seen += 1;
            if seen == count {
                return text[..idx + c.len_utf8()].trim().to_string();
            }
        }
    }

    text.trim().to_string()
}
