//! Named-placeholder handling.
//!
//! Two jobs live here: the literal presence check that decides whether a
//! parameter gets bound at all, and the scanner that rewrites `:name`
//! placeholders into `$N` positional placeholders for backends that only
//! speak positional (`PostgreSQL`). The scanner skips quoted strings,
//! comments, dollar-quoted blocks, and `::type` casts via a lightweight
//! state machine; it is not a SQL parser.
//!
//! The two checks deliberately disagree on prefixes: the presence check is
//! substring-based, so the name `id` counts as present in `:identity`, while
//! the rewriter matches whole identifiers and leaves `:identity` alone. On
//! the positional backend such an entry is "present" but never rewritten,
//! and the surviving `:identity` fails at prepare time.

use std::borrow::Cow;

mod scanner;

use scanner::{
    State, is_block_comment_end, is_block_comment_start, is_line_comment_start, matches_tag,
    scan_ident, try_start_dollar_quote,
};

use crate::params::ParamMap;

/// Binder rule: a parameter is bound iff its placeholder occurs literally in
/// the SQL text. This is deliberately the same naive substring check the
/// binding contract specifies, not a token-aware lookup.
#[must_use]
pub fn placeholder_occurs(sql: &str, name: &str) -> bool {
    sql.match_indices(':')
        .any(|(idx, _)| sql[idx + 1..].starts_with(name))
}

/// Rewrite `:name` placeholders to `$N` positional placeholders.
///
/// Only names present in `params` are rewritten; anything else is left
/// untouched for the driver to reject. Repeated names reuse the same `$N`.
/// Returns the rewritten SQL (borrowed when nothing changed) and the
/// distinct parameter names in `$1..$N` order.
#[must_use]
pub fn number_placeholders<'a>(sql: &'a str, params: &ParamMap) -> (Cow<'a, str>, Vec<String>) {
    // Byte buffer so multi-byte characters inside literals copy through
    // unchanged; everything inserted is ASCII, so the result stays UTF-8.
    let mut out: Option<Vec<u8>> = None;
    let mut order: Vec<String> = Vec::new();
    let mut state = State::Normal;
    let mut idx = 0;
    let bytes = sql.as_bytes();

    while idx < bytes.len() {
        let b = bytes[idx];
        let mut replaced = false;
        match state {
            State::Normal => match b {
                b'\'' => state = State::SingleQuoted,
                b'"' => state = State::DoubleQuoted,
                _ if is_line_comment_start(bytes, idx) => state = State::LineComment,
                _ if is_block_comment_start(bytes, idx) => state = State::BlockComment(1),
                b'$' => {
                    if let Some((tag, advance)) = try_start_dollar_quote(bytes, idx) {
                        if let Some(ref mut buf) = out {
                            buf.extend_from_slice(&bytes[idx..=advance]);
                        }
                        state = State::DollarQuoted(tag);
                        idx = advance;
                        replaced = true;
                    }
                }
                b':' => {
                    if bytes.get(idx + 1) == Some(&b':') {
                        // Cast syntax; emit both colons and move on
                        if let Some(ref mut buf) = out {
                            buf.push(b':');
                        }
                        idx += 1;
                    } else if let Some((ident_end, ident)) = scan_ident(bytes, idx + 1)
                        && params.contains(ident)
                    {
                        let position = match order.iter().position(|n| n == ident) {
                            Some(existing) => existing,
                            None => {
                                order.push(ident.to_string());
                                order.len() - 1
                            }
                        };
                        let buf = out.get_or_insert_with(|| sql.as_bytes()[..idx].to_vec());
                        buf.push(b'$');
                        buf.extend_from_slice((position + 1).to_string().as_bytes());
                        idx = ident_end - 1;
                        replaced = true;
                    }
                }
                _ => {}
            },
            State::SingleQuoted => {
                if b == b'\'' {
                    if bytes.get(idx + 1) == Some(&b'\'') {
                        idx += 1; // skip escaped quote
                    } else {
                        state = State::Normal;
                    }
                }
            }
            State::DoubleQuoted => {
                if b == b'"' {
                    if bytes.get(idx + 1) == Some(&b'"') {
                        idx += 1; // skip escaped quote
                    } else {
                        state = State::Normal;
                    }
                }
            }
            State::LineComment => {
                if b == b'\n' {
                    state = State::Normal;
                }
            }
            State::BlockComment(depth) => {
                if is_block_comment_start(bytes, idx) {
                    state = State::BlockComment(depth + 1);
                } else if is_block_comment_end(bytes, idx) {
                    if depth == 1 {
                        state = State::Normal;
                    } else {
                        state = State::BlockComment(depth - 1);
                    }
                }
            }
            State::DollarQuoted(ref tag) => {
                if b == b'$' && matches_tag(bytes, idx, tag) {
                    let close = idx + 1 + tag.len();
                    if let Some(ref mut buf) = out {
                        buf.extend_from_slice(&bytes[idx..=close]);
                    }
                    state = State::Normal;
                    idx = close;
                    replaced = true;
                }
            }
        }

        if let Some(ref mut buf) = out
            && !replaced
        {
            buf.push(b);
        }

        idx += 1;
    }

    let sql = match out {
        Some(buf) => Cow::Owned(String::from_utf8_lossy(&buf).into_owned()),
        None => Cow::Borrowed(sql),
    };
    (sql, order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SqlValue;

    fn params(names: &[&str]) -> ParamMap {
        names
            .iter()
            .map(|n| (n.to_string(), SqlValue::Int(0)))
            .collect()
    }

    #[test]
    fn numbers_named_placeholders_in_order() {
        let (sql, order) = number_placeholders(
            "INSERT INTO t (a,b) VALUES (:a,:b)",
            &params(&["a", "b"]),
        );
        assert_eq!(sql, "INSERT INTO t (a,b) VALUES ($1,$2)");
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn repeated_names_share_a_position() {
        let (sql, order) = number_placeholders(
            "SELECT * FROM t WHERE a = :x OR b = :x OR c = :y",
            &params(&["x", "y"]),
        );
        assert_eq!(sql, "SELECT * FROM t WHERE a = $1 OR b = $1 OR c = $2");
        assert_eq!(order, vec!["x", "y"]);
    }

    #[test]
    fn unknown_names_are_left_untouched() {
        let (sql, order) =
            number_placeholders("SELECT * FROM t WHERE a = :missing", &params(&["x"]));
        assert!(matches!(sql, Cow::Borrowed(_)));
        assert_eq!(sql, "SELECT * FROM t WHERE a = :missing");
        assert!(order.is_empty());
    }

    #[test]
    fn skips_literals_comments_and_casts() {
        let (sql, order) = number_placeholders(
            "SELECT ':a', b::int -- :a\n/* :a */ FROM t WHERE a = :a",
            &params(&["a"]),
        );
        assert_eq!(sql, "SELECT ':a', b::int -- :a\n/* :a */ FROM t WHERE a = $1");
        assert_eq!(order, vec!["a"]);
    }

    #[test]
    fn skips_dollar_quoted_blocks() {
        let (sql, order) = number_placeholders(
            "$foo$ select :a from t $foo$ where a = :a",
            &params(&["a"]),
        );
        assert_eq!(sql, "$foo$ select :a from t $foo$ where a = $1");
        assert_eq!(order, vec!["a"]);

        // Delimiters copy through intact when a rewrite precedes the block
        let (sql, order) = number_placeholders(
            "SELECT :a, $tag$ :b $tag$ FROM t",
            &params(&["a", "b"]),
        );
        assert_eq!(sql, "SELECT $1, $tag$ :b $tag$ FROM t");
        assert_eq!(order, vec!["a"]);
    }

    #[test]
    fn multibyte_text_copies_through() {
        let (sql, order) = number_placeholders(
            "SELECT * FROM t WHERE a = :x AND name = 'café'",
            &params(&["x"]),
        );
        assert_eq!(sql, "SELECT * FROM t WHERE a = $1 AND name = 'café'");
        assert_eq!(order, vec!["x"]);
    }

    #[test]
    fn prefix_names_count_as_present_but_are_not_rewritten() {
        let map = params(&["id"]);
        assert!(placeholder_occurs("WHERE x = :identity", "id"));
        let (sql, order) = number_placeholders("WHERE x = :identity", &map);
        assert!(matches!(sql, Cow::Borrowed(_)));
        assert_eq!(sql, "WHERE x = :identity");
        assert!(order.is_empty());
    }

    #[test]
    fn presence_check_is_a_literal_substring() {
        assert!(placeholder_occurs("SELECT * FROM t WHERE id = :id", "id"));
        assert!(!placeholder_occurs("SELECT * FROM t", "id"));
        // Substring semantics, by contract: ':identity' matches 'id'
        assert!(placeholder_occurs("WHERE x = :identity", "id"));
    }
}
