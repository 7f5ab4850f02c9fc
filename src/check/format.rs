/// Renders names as a bracketed list of quoted strings, e.g. `['id', 'theme']`.
pub fn format_name_list(names: &[String]) -> String {
    let items = names
        .iter()
        .map(|name| format_quoted(name))
        .collect::<Vec<_>>()
        .join(", ");

    format!("[{}]", items)
}

/// Single quotes unless the text holds a single quote and no double quote.
pub fn format_quoted(value: &str) -> String {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut formatted = String::with_capacity(value.len() + 2);
    formatted.push(quote);

    for c in value.chars() {
        match c {
            '\\' => formatted.push_str("\\\\"),
            '\n' => formatted.push_str("\\n"),
            '\r' => formatted.push_str("\\r"),
            '\t' => formatted.push_str("\\t"),
            c if c == quote => {
                formatted.push('\\');
                formatted.push(c);
            }
            c if !is_printable(c) => formatted.push_str(&escape_code_point(c)),
            c => formatted.push(c),
        }
    }

    formatted.push(quote);
    formatted
}

fn escape_code_point(c: char) -> String {
    let code = c as u32;
    if code < 0x100 {
        format!("\\x{:02x}", code)
    } else if code < 0x10000 {
        format!("\\u{:04x}", code)
    } else {
        format!("\\U{:08x}", code)
    }
}

/// Control characters, separators other than the ASCII space, and the
/// invisible format characters are written as escapes.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() {
        return false;
    }
    !matches!(
        c,
        '\u{a0}'
            | '\u{ad}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200f}'
            | '\u{2028}'..='\u{202f}'
            | '\u{205f}'..='\u{2064}'
            | '\u{3000}'
            | '\u{feff}'
            | '\u{e000}'..='\u{f8ff}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn plain_names() {
        assert_eq!(format_name_list(&names(&["id", "theme"])), "['id', 'theme']");
        assert_eq!(format_name_list(&[]), "[]");
    }

    #[test]
    fn quote_selection() {
        assert_eq!(format_quoted("it's"), "\"it's\"");
        assert_eq!(format_quoted("say \"hi\""), "'say \"hi\"'");
        assert_eq!(format_quoted("both ' and \""), "'both \\' and \"'");
    }

    #[test]
    fn escapes_control_characters() {
        assert_eq!(format_quoted("a\\b"), "'a\\\\b'");
        assert_eq!(format_quoted("line\nbreak\t"), "'line\\nbreak\\t'");
        assert_eq!(format_quoted("bell\x07"), "'bell\\x07'");
        assert_eq!(format_quoted("thème"), "'thème'");
    }

    #[test]
    fn escapes_invisible_unicode() {
        assert_eq!(format_quoted("next\u{85}line"), "'next\\x85line'");
        assert_eq!(format_quoted("nb\u{a0}sp"), "'nb\\xa0sp'");
        assert_eq!(format_quoted("para\u{2028}sep"), "'para\\u2028sep'");
        assert_eq!(format_quoted("bom\u{feff}"), "'bom\\ufeff'");
        assert_eq!(format_quoted("wide\u{3000}"), "'wide\\u3000'");
        assert_eq!(format_quoted("名前"), "'名前'");
    }
}
