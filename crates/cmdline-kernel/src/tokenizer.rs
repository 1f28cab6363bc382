//! Tokenizer for command lines.
//!
//! The grammar:
//!
//! - tokens are separated by runs of unquoted spaces
//! - a double quote at the start of a token opens a verbatim span that runs
//!   to the next double quote (or the end of the line); the quotes are
//!   dropped and the scan continues in the same token afterwards
//! - a double quote anywhere else is an ordinary character
//! - there are no escape characters
//!
//! An unterminated quote is tolerated: the span simply consumes the rest of
//! the line.

/// Split a raw line into argument tokens.
///
/// A token is emitted only when it is non-empty, so `""` on its own does not
/// produce an argument.
pub fn tokenize(line: &str) -> Vec<String> {
    scan(line).0
}

/// True if the line opens a quoted span that is never closed.
///
/// Tokenizing such a line still succeeds; this is only used for diagnostics.
pub fn has_unterminated_quote(line: &str) -> bool {
    scan(line).1
}

fn scan(line: &str) -> (Vec<String>, bool) {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut unterminated = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            ' ' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            '"' if current.is_empty() => {
                unterminated = true;
                for quoted in chars.by_ref() {
                    if quoted == '"' {
                        unterminated = false;
                        break;
                    }
                    current.push(quoted);
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    (tokens, unterminated)
}
