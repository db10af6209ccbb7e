//! Single-layer quoting for option strings.
//!
//! `unquote` strips exactly one layer of `"..."`, `'...'` or `` `...` `` quoting
//! and decodes backslash escapes inside double and single quotes. Callers treat
//! any error as "not quoted" and keep the raw text.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum UnquoteError {
    /// Input is not wrapped in a matching pair of quote characters.
    NotQuoted,
    /// Quote character of the same kind appears unescaped inside the literal.
    UnexpectedQuote,
    /// Raw newline inside a single or double quoted literal.
    UnexpectedNewline,
    InvalidEscape {
        escape: char,
    },
    InvalidCodePoint {
        value: u32,
    },
    /// Byte escapes did not assemble into valid UTF-8.
    InvalidUtf8,
    /// Single quotes must enclose exactly one character.
    NotSingleChar,
}

impl fmt::Display for UnquoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnquoteError::NotQuoted => write!(f, "input is not quoted"),
            UnquoteError::UnexpectedQuote => write!(f, "unescaped quote inside quoted text"),
            UnquoteError::UnexpectedNewline => write!(f, "newline inside quoted text"),
            UnquoteError::InvalidEscape { escape } => write!(f, "invalid escape '\\{escape}'"),
            UnquoteError::InvalidCodePoint { value } => {
                write!(f, "escape value {value:#x} is out of range")
            }
            UnquoteError::InvalidUtf8 => write!(f, "escaped bytes are not valid UTF-8"),
            UnquoteError::NotSingleChar => {
                write!(f, "single quotes must enclose exactly one character")
            }
        }
    }
}

impl std::error::Error for UnquoteError {}

/// Strip one layer of quoting from `input`.
pub fn unquote(input: &str) -> Result<String, UnquoteError> {
    let mut chars = input.chars();
    let (first, last) = match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(UnquoteError::NotQuoted),
    };
    if first != last || !matches!(first, '"' | '\'' | '`') {
        return Err(UnquoteError::NotQuoted);
    }
    let inner = chars.as_str();

    // Backtick literals are raw: no escapes, carriage returns dropped.
    if first == '`' {
        if inner.contains('`') {
            return Err(UnquoteError::UnexpectedQuote);
        }
        return Ok(inner.replace('\r', ""));
    }

    if inner.contains('\n') {
        return Err(UnquoteError::UnexpectedNewline);
    }

    let decoded = decode_escapes(inner, first)?;
    if first == '\'' && decoded.chars().count() != 1 {
        return Err(UnquoteError::NotSingleChar);
    }
    Ok(decoded)
}

fn decode_escapes(inner: &str, quote: char) -> Result<String, UnquoteError> {
    let mut out: Vec<u8> = Vec::with_capacity(inner.len());
    let mut buf = [0u8; 4];
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c == quote {
            return Err(UnquoteError::UnexpectedQuote);
        }
        if c != '\\' {
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }

        let escape = chars
            .next()
            .ok_or(UnquoteError::InvalidEscape { escape: '\\' })?;
        match escape {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0c),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0b),
            '\\' => out.push(b'\\'),
            '"' | '\'' if escape == quote => out.push(escape as u8),
            'x' => out.push(read_hex(&mut chars, escape, 2)? as u8),
            'u' | 'U' => {
                let digits = if escape == 'u' { 4 } else { 8 };
                let value = read_hex(&mut chars, escape, digits)?;
                let decoded =
                    char::from_u32(value).ok_or(UnquoteError::InvalidCodePoint { value })?;
                out.extend_from_slice(decoded.encode_utf8(&mut buf).as_bytes());
            }
            '0'..='7' => {
                let mut value = escape as u32 - '0' as u32;
                for _ in 0..2 {
                    let digit = chars
                        .next()
                        .and_then(|d| d.to_digit(8))
                        .ok_or(UnquoteError::InvalidEscape { escape })?;
                    value = value * 8 + digit;
                }
                if value > 0o377 {
                    return Err(UnquoteError::InvalidCodePoint { value });
                }
                out.push(value as u8);
            }
            other => return Err(UnquoteError::InvalidEscape { escape: other }),
        }
    }

    String::from_utf8(out).map_err(|_| UnquoteError::InvalidUtf8)
}

fn read_hex(
    chars: &mut std::str::Chars<'_>,
    escape: char,
    digits: usize,
) -> Result<u32, UnquoteError> {
    let mut value = 0u32;
    for _ in 0..digits {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or(UnquoteError::InvalidEscape { escape })?;
        value = value * 16 + digit;
    }
    Ok(value)
}

/// Wrap `value` in double quotes, escaping it so that `unquote` returns it unchanged.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0b}' => out.push_str("\\v"),
            '\u{0c}' => out.push_str("\\f"),
            c if c.is_control() => {
                let code = c as u32;
                if code < 0x80 {
                    out.push_str(&format!("\\x{code:02x}"));
                } else {
                    out.push_str(&format!("\\u{code:04x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
