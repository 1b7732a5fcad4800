//! Rendering of identifier lists inside validation messages.
//!
//! Lists look like `['S1', 'S2']`: each value quoted, comma-space separated,
//! wrapped in brackets. Consumers of the verdict grep these messages, so the
//! quoting rules are fixed.

use std::fmt::Write;

/// Quote a single value. Single quotes are used unless the value contains a
/// single quote and no double quote.
pub fn quote(value: &str) -> String {
    let delim = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(delim);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c if is_unprintable(c) => {
                let code = c as u32;
                let _ = match code {
                    0..=0xff => write!(out, "\\x{code:02x}"),
                    0x100..=0xffff => write!(out, "\\u{code:04x}"),
                    _ => write!(out, "\\U{code:08x}"),
                };
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

/// Control, format, separator (other than space) and private-use characters
/// are written as escapes rather than verbatim.
fn is_unprintable(c: char) -> bool {
    matches!(
        c as u32,
        0x00..=0x1f
            | 0x7f..=0xa0
            | 0xad
            | 0x034f
            | 0x061c
            | 0x1680
            | 0x180e
            | 0x2000..=0x200f
            | 0x2028..=0x202f
            | 0x205f..=0x206f
            | 0x3000
            | 0xd800..=0xf8ff
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0xe0000..=0xe0fff
            | 0xf0000..=0x10ffff
    )
}

/// Render values as a bracketed, quoted list.
pub fn quoted_list<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items: Vec<String> = values.into_iter().map(|v| quote(v.as_ref())).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_use_single_quotes() {
        assert_eq!(quoted_list(["S1", "S2"]), "['S1', 'S2']");
    }

    #[test]
    fn empty_list() {
        assert_eq!(quoted_list(Vec::<String>::new()), "[]");
    }

    #[test]
    fn embedded_quotes_switch_or_escape() {
        assert_eq!(quote("it's"), "\"it's\"");
        assert_eq!(quote("say \"hi\""), "'say \"hi\"'");
        assert_eq!(quote("both ' and \""), "'both \\' and \"'");
    }

    #[test]
    fn control_characters_are_escaped() {
        assert_eq!(quote("a\\b"), "'a\\\\b'");
        assert_eq!(quote("a\tb\n"), "'a\\tb\\n'");
        assert_eq!(quote("\u{1}"), "'\\x01'");
    }

    #[test]
    fn unprintable_non_ascii_is_escaped() {
        assert_eq!(quote("a\u{85}b"), "'a\\x85b'");
        assert_eq!(quote("\u{a0}"), "'\\xa0'");
        assert_eq!(quote("x\u{200b}"), "'x\\u200b'");
        assert_eq!(quote("\u{feff}"), "'\\ufeff'");
        assert_eq!(quote("\u{e0001}"), "'\\U000e0001'");
    }

    #[test]
    fn printable_non_ascii_is_verbatim() {
        assert_eq!(quote("Müller-é"), "'Müller-é'");
        assert_eq!(quote("样本"), "'样本'");
    }
}
