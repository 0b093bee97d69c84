//! Width-aware text helpers
//!
//! Terminal columns, not chars: CJK titles and emoji take two cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to at most `max_width` columns, ending with "…" when cut
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if line_width > 0 && line_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width > width {
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if line_width + w > width {
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(c);
                    line_width += w;
                }
                continue;
            }

            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Inception", 20), "Inception");
        assert_eq!(truncate("The Shawshank Redemption", 10), "The Shaws…");
        assert_eq!(truncate("Inception", 0), "");
        assert_eq!(truncate("千と千尋の神隠し", 7), "千と千…");
    }

    #[test]
    fn test_wrap_words() {
        let lines = wrap("A thief who steals corporate secrets", 12);
        assert_eq!(lines, vec!["A thief who", "steals", "corporate", "secrets"]);
        assert!(lines.iter().all(|l| l.width() <= 12));
    }

    #[test]
    fn test_wrap_long_word_and_paragraphs() {
        let lines = wrap("abcdefghij\n\nxy", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "", "xy"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap("", 10).is_empty());
    }
}
