use lipgloss::Style;

pub fn truncate_chars(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

pub fn blank_line(width: usize) -> String {
    " ".repeat(width)
}

// Center `text` in `width` columns; only the text itself is styled so padding stays plain.
pub fn center_styled(text: &str, width: usize, style: &Style) -> String {
    let text = truncate_chars(text, width);
    let len = text.chars().count();
    if len == 0 {
        return blank_line(width);
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), style.render(&text), " ".repeat(right))
}

/// Truncate or pad `lines` so exactly `height` lines remain.
pub fn fit_height(mut lines: Vec<String>, width: usize, height: usize) -> Vec<String> {
    lines.truncate(height);
    while lines.len() < height {
        lines.push(blank_line(width));
    }
    lines
}
