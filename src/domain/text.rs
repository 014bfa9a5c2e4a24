use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "…";

/// Wraps `s` at word boundaries so that no line is wider than `width` columns.
/// Words wider than a whole line are split by character.
pub fn wrap_words(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = vec![];
    for paragraph in s.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let sep = usize::from(!line.is_empty());
            if line.width() + sep + word.width() <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            for c in word.chars() {
                if line.width() + c.width().unwrap_or(0) > width {
                    lines.push(std::mem::take(&mut line));
                }
                line.push(c);
            }
        }
        lines.push(line);
    }
    lines
}

/// Cuts `s` to `width` columns, ending with an ellipsis when something was dropped.
pub fn ellipsize(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - ELLIPSIS.width();
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + c.width().unwrap_or(0) > budget {
            break;
        }
        out.push(c);
    }
    format!("{}{ELLIPSIS}", out.trim_end())
}

/// Wraps `s` and keeps at most `max_lines`, marking the cut on the last kept line.
pub fn clamp_lines(s: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_words(s, width);
    if lines.len() <= max_lines {
        return lines;
    }

    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let shortened = ellipsize(&format!("{last}{ELLIPSIS}"), width);
        *last = if shortened.ends_with(ELLIPSIS) {
            shortened
        } else {
            format!("{shortened}{ELLIPSIS}")
        };
    }
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_words_no_wrap() {
        assert_eq!(wrap_words("hello, world!", 13), vec!["hello, world!"]);
    }

    #[test]
    fn test_wrap_words_at_word_boundary() {
        assert_eq!(
            wrap_words("coffee books and long talks", 12),
            vec!["coffee books", "and long", "talks"]
        );
    }

    #[test]
    fn test_wrap_words_splits_long_word() {
        assert_eq!(wrap_words("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_words_double_width() {
        assert_eq!(wrap_words("こんにちは", 4), vec!["こん", "にち", "は"]);
    }

    #[test]
    fn test_wrap_words_zero_width() {
        assert_eq!(wrap_words("hello", 0), Vec::<String>::new());
    }

    #[test]
    fn test_ellipsize() {
        assert_eq!(ellipsize("short", 10), "short");
        assert_eq!(ellipsize("a longer sentence", 8), "a longe…");
        assert_eq!(ellipsize("anything", 0), "");
    }

    #[test]
    fn test_clamp_lines_keeps_short_text() {
        assert_eq!(clamp_lines("one two", 20, 2), vec!["one two"]);
    }

    #[test]
    fn test_clamp_lines_marks_cut() {
        let lines = clamp_lines("one two three four five six", 9, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "one two");
        assert!(lines[1].ends_with(ELLIPSIS));
        assert!(lines[1].width() <= 9);
    }
}
