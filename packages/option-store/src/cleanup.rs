//! Textual clean-up of generated literal text.
//!
//! Hand-written option lines (raw section options, raw code) can leave
//! separators dangling in front of a closing brace: `{a: 1, , }`. This is a
//! best-effort pass over the text, not a JavaScript parser. String literals
//! (`'...'`, `"..."`, `` `...` ``) and comments are copied untouched; other
//! raw code is not, so a handler body containing `[1, ]` gets tidied as well.

/// The character separating parameters.
pub const PARAM_SEPARATOR: char = ',';

/// Characters closing a block.
pub const BLOCK_END: [char; 2] = ['}', ']'];

const STRING_DELIMITERS: [char; 3] = ['\'', '"', '`'];

#[derive(Clone, Copy, PartialEq)]
enum Scan {
    Code,
    /// Inside a string opened by the given delimiter.
    Quoted(char),
    LineComment,
    BlockComment,
}

/// Remove separators that are followed only by blanks (and more separators)
/// before a block terminator.
///
/// ```rust
/// use chartopts_option_store::cleanup::clean_literal;
///
/// assert_eq!(clean_literal("{a: 1, , }"), "{a: 1}");
/// assert_eq!(clean_literal("{a: 'x, }'}"), "{a: 'x, }'}");
/// assert_eq!(clean_literal(r#"{a: "it's, }", b: 1, }"#), r#"{a: "it's, }", b: 1}"#);
/// ```
pub fn clean_literal(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut scan = Scan::Code;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        match scan {
            Scan::Quoted(delimiter) => {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = next {
                        out.push(escaped);
                        i += 1;
                    }
                } else if c == delimiter {
                    scan = Scan::Code;
                }
                i += 1;
            }
            Scan::LineComment => {
                out.push(c);
                if c == '\n' {
                    scan = Scan::Code;
                }
                i += 1;
            }
            Scan::BlockComment => {
                out.push(c);
                if c == '*' && next == Some('/') {
                    out.push('/');
                    scan = Scan::Code;
                    i += 1;
                }
                i += 1;
            }
            Scan::Code => {
                match (c, next) {
                    (c, _) if STRING_DELIMITERS.contains(&c) => {
                        scan = Scan::Quoted(c);
                        out.push(c);
                    }
                    ('/', Some('/')) => {
                        scan = Scan::LineComment;
                        out.push_str("//");
                        i += 1;
                    }
                    ('/', Some('*')) => {
                        scan = Scan::BlockComment;
                        out.push_str("/*");
                        i += 1;
                    }
                    (PARAM_SEPARATOR, _) => {
                        let mut j = i + 1;
                        while j < chars.len()
                            && (chars[j].is_whitespace() || chars[j] == PARAM_SEPARATOR)
                        {
                            j += 1;
                        }
                        if j < chars.len() && BLOCK_END.contains(&chars[j]) {
                            // Resume at the terminator; the blank span is gone.
                            i = j;
                            continue;
                        }
                        out.push(c);
                    }
                    _ => out.push(c),
                }
                i += 1;
            }
        }
    }

    out
}

/// Join the non-empty items with `separator`.
///
/// Absent fragments (empty strings) are skipped, so no separator is ever
/// emitted for them.
pub fn join_present<I, S>(items: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for item in items {
        let item = item.as_ref();
        if item.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(separator);
        }
        out.push_str(item);
    }
    out
}
