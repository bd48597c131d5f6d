#[derive(Clone)]
pub(super) enum State {
    Normal,
    SingleQuoted,
    DoubleQuoted,
    LineComment,
    BlockComment(u32),
    DollarQuoted(String),
}

pub(super) fn is_line_comment_start(bytes: &[u8], idx: usize) -> bool {
    bytes[idx] == b'-' && bytes.get(idx + 1) == Some(&b'-')
}

pub(super) fn is_block_comment_start(bytes: &[u8], idx: usize) -> bool {
    bytes[idx] == b'/' && bytes.get(idx + 1) == Some(&b'*')
}

pub(super) fn is_block_comment_end(bytes: &[u8], idx: usize) -> bool {
    bytes[idx] == b'*' && bytes.get(idx + 1) == Some(&b'/')
}

/// Detect a dollar-quote opener like `$$` or `$tag$` at `idx`; returns the
/// tag and the index of the closing `$` of the opener.
pub(super) fn try_start_dollar_quote(bytes: &[u8], idx: usize) -> Option<(String, usize)> {
    debug_assert_eq!(bytes[idx], b'$');
    let mut end = idx + 1;
    while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
        end += 1;
    }
    if bytes.get(end) == Some(&b'$') {
        let tag = std::str::from_utf8(&bytes[idx + 1..end]).ok()?.to_string();
        Some((tag, end))
    } else {
        None
    }
}

/// True when the closing delimiter `$tag$` sits at `idx`.
pub(super) fn matches_tag(bytes: &[u8], idx: usize, tag: &str) -> bool {
    let tag_bytes = tag.as_bytes();
    let close = idx + 1 + tag_bytes.len();
    bytes.get(idx + 1..close) == Some(tag_bytes) && bytes.get(close) == Some(&b'$')
}

/// Scan a placeholder identifier (`[A-Za-z_][A-Za-z0-9_]*`) starting at
/// `start`; returns the end index and the identifier text.
pub(super) fn scan_ident(bytes: &[u8], start: usize) -> Option<(usize, &str)> {
    let first = *bytes.get(start)?;
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return None;
    }
    let mut idx = start + 1;
    while idx < bytes.len() && (bytes[idx].is_ascii_alphanumeric() || bytes[idx] == b'_') {
        idx += 1;
    }
    std::str::from_utf8(&bytes[start..idx])
        .ok()
        .map(|ident| (idx, ident))
}
