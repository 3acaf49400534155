const QUAD_BACKSLASH: &str = "\\\\\\\\";
const DOUBLE_BACKSLASH: &str = "\\\\";

/// Rewrites backslashes that do not start a valid JSON escape so the
/// candidate can be parsed.
///
/// A backslash followed by `"`, `\`, `/`, `b`, `f`, `n`, `r`, `t`, or by `u`
/// plus four hex digits, is copied together with that character. Every other
/// backslash is doubled. Runs of four backslashes are then collapsed to two
/// until none remain.
///
/// This is lexical: it does not track whether a backslash sits inside a
/// string literal, and LaTeX commands that begin with a valid escape letter
/// (`\frac`, `\theta`, `\nabla`) still decode as control characters.
pub fn repair_escapes(candidate: &str) -> String {
    let chars: Vec<char> = candidate.chars().collect();
    let mut repaired = String::with_capacity(candidate.len() + candidate.len() / 8);

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c != '\\' {
            repaired.push(c);
            i += 1;
            continue;
        }

        match chars.get(i + 1) {
            Some(&next) if is_simple_escape(next) => {
                repaired.push('\\');
                repaired.push(next);
                i += 2;
            }
            Some(&'u') if has_unicode_digits(&chars[i + 2..]) => {
                repaired.push('\\');
                repaired.push('u');
                i += 2;
            }
            _ => {
                repaired.push_str(DOUBLE_BACKSLASH);
                i += 1;
            }
        }
    }

    while repaired.contains(QUAD_BACKSLASH) {
        repaired = repaired.replace(QUAD_BACKSLASH, DOUBLE_BACKSLASH);
    }
    repaired
}

fn is_simple_escape(c: char) -> bool {
    matches!(c, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')
}

fn has_unicode_digits(rest: &[char]) -> bool {
    rest.len() >= 4 && rest[..4].iter().all(|c| c.is_ascii_hexdigit())
}
