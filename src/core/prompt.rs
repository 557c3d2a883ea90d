pub const INPUT_PLACEHOLDER: &str = "{input}";

/// Replaces the first `{input}` in `template`; later occurrences stay literal.
pub fn render_prompt(template: &str, input: &str) -> String {
    template.replacen(INPUT_PLACEHOLDER, input, 1)
}

/// First `max_chars` characters, for progress logs.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
