//! Text cleanup applied before and after measurement.

/// Remove line breaks and other control characters, then trim.
pub fn clear_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() && *c != '\u{2028}' && *c != '\u{2029}')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Drop empty strings from a line list. Whitespace-only lines stay.
pub fn non_empty_lines(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().filter(|line| !line.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_control_chars() {
        assert_eq!(clear_control_chars("  two\r\nlines\t "), "twolines");
        assert_eq!(clear_control_chars("para\u{2028}graph"), "paragraph");
        assert_eq!(clear_control_chars("\n\n"), "");
        assert_eq!(clear_control_chars("中文 标题"), "中文 标题");
    }

    #[test]
    fn test_non_empty_lines() {
        let lines = vec!["a".to_string(), String::new(), " ".to_string(), String::new()];
        assert_eq!(non_empty_lines(lines), ["a", " "]);
    }
}
