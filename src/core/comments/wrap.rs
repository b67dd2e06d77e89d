//! Greedy word wrapping.
//!
//! Words are never split. A word wider than the requested width gets a line
//! of its own and overflows it.

/// Wrap whitespace-separated text into lines of at most `width` characters.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    wrap_words(text.split_whitespace(), width)
}

/// Wrap a word sequence into lines of at most `width` characters.
///
/// Width is measured in `char`s. An empty sequence produces no lines.
pub fn wrap_words<'a, I>(words: I, width: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in words {
        let word_width = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
