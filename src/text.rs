use unicode_width::UnicodeWidthChar;

/// Hard-wrap `s` to `width` terminal columns, breaking on display width
/// rather than char count so double-width characters wrap correctly.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut wrapped = String::with_capacity(s.len() + s.len() / width);
    let mut line_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if line_width + char_width > width {
            wrapped.push('\n');
            line_width = char_width;
        } else {
            line_width += char_width;
        }
        wrapped.push(c);
    }

    wrapped
}

/// Cut `s` down to at most `height` lines, ending with an ellipsis line
/// when anything was dropped.
pub fn truncate_text(s: &str, height: usize) -> String {
    if height == 0 {
        return String::new();
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() > height {
        if height == 1 {
            String::from("...")
        } else {
            format!("{}\n...", lines[..height - 1].join("\n"))
        }
    } else {
        s.to_string()
    }
}
