/// A raw source line together with its normalized code.
#[derive(Debug, Clone)]
pub struct Line {
    /// 0-based index in the source
    pub idx: usize,
    pub raw: String,
    pub code: String,
}

impl Line {
    pub fn new(idx: usize, raw: &str) -> Self {
        Line {
            idx,
            raw: raw.to_string(),
            code: normalize(raw).to_string(),
        }
    }

    /// Split source text into lines. `\n` and `\r\n` terminators are both accepted.
    pub fn split(src: &str) -> Vec<Line> {
        src.lines()
            .enumerate()
            .map(|(idx, raw)| Line::new(idx, raw))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn is_label(&self) -> bool {
        self.code.starts_with('(')
    }

    /// Text left over after the code and before any comment, e.g. `= M` in `D = M`.
    pub fn trailing(&self) -> Option<&str> {
        trailing_text(&self.raw)
    }
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

fn is_comment(rest: &str) -> bool {
    rest.starts_with("//")
}

/// Byte index of the first character that belongs to code, or `None` for a
/// blank or comment-only line.
pub fn first_significant(raw: &str) -> Option<usize> {
    for (idx, c) in raw.char_indices() {
        if is_space(c) {
            continue;
        }
        if c == '\n' || is_comment(&raw[idx..]) {
            return None;
        }
        return Some(idx);
    }
    None
}

/// Strip indentation, the trailing comment and the line terminator.
///
/// Code ends at the first whitespace, so `D = M` normalizes to `D`.
pub fn normalize(raw: &str) -> &str {
    let Some(start) = first_significant(raw) else {
        return "";
    };
    let rest = &raw[start..];
    let end = rest
        .char_indices()
        .find(|&(idx, c)| is_space(c) || c == '\n' || is_comment(&rest[idx..]))
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Non-comment text following the code after whitespace, `None` if there is none.
pub fn trailing_text(raw: &str) -> Option<&str> {
    let start = first_significant(raw)?;
    let rest = &raw[start..];
    let code = normalize(rest);
    let tail = rest[code.len()..].trim_start_matches(|c| is_space(c) || c == '\n');
    let tail = tail.trim_end_matches(|c| is_space(c) || c == '\n');
    if tail.is_empty() || is_comment(tail) {
        None
    } else {
        Some(tail)
    }
}
