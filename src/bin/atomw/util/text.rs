pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

pub fn truncate(s: &str, max_len: usize) -> String {
    match max_len {
        0 => String::new(),
        _ if s.chars().count() <= max_len => s.to_string(),
        1 => "…".to_string(),
        _ => {
            let mut out: String = s.chars().take(max_len - 1).collect();
            out.push('…');
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_splits_on_width() {
        assert_eq!(wrap("invalid formula 'O1'", 40), vec!["invalid formula 'O1'"]);
        assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_cases() {
        assert_eq!(truncate("NaCl", 10), "NaCl");
        assert_eq!(truncate("NaCl", 4), "NaCl");
        assert_eq!(truncate("C6H12O6", 5), "C6H1…");
        assert_eq!(truncate("C6H12O6", 1), "…");
        assert_eq!(truncate("CuSO4·5H2O", 6), "CuSO4…");
    }
}
