//! Statement assembly.
//!
//! [`render_raw`] walks the clause list once and writes keywords, clause text,
//! separators and group parentheses. [`number_placeholders`] then rewrites the
//! k-th `?` to `$k`.

use crate::clause::Clause;
use crate::kind::StatementKind;

/// Render a statement with raw `?` placeholders.
///
/// Clauses must already be grouped by kind; [`Query`](crate::Query) keeps
/// them in rank order.
pub(crate) fn render_raw(stmt: StatementKind, clauses: &[Clause]) -> String {
    let mut out = String::with_capacity(64);
    out.push_str(stmt.keyword());

    let mut opened: u16 = 0;

    for (i, clause) in clauses.iter().enumerate() {
        let kind = clause.kind();
        let prev = i.checked_sub(1).map(|p| &clauses[p]);
        let next = clauses.get(i + 1);

        if opened & kind.bit() == 0 {
            opened |= kind.bit();
            out.push_str(kind.keyword());
            if kind.wraps_group() {
                out.push('(');
            }
        }

        clause.render_into(&mut out);

        match next {
            Some(next) if next.kind() == kind => {
                let sep = next.separator();
                // The conjunction changes after this clause: close the run so
                // far and open a new group for what follows.
                let switches = prev.is_some_and(|p| p.kind() == kind) && clause.separator() != sep;
                if switches {
                    out.push(')');
                    out.push_str(sep);
                    out.push('(');
                } else {
                    out.push_str(sep);
                }
            }
            Some(next) => {
                if kind.wraps_group() {
                    out.push(')');
                }
                // COUNT(...) and plain columns share the projection list.
                if kind.projects() && next.kind().projects() {
                    out.push_str(", ");
                } else {
                    out.push(' ');
                }
            }
            None => {
                if kind.wraps_group() {
                    out.push(')');
                }
            }
        }
    }

    out
}

/// Rewrite every `?` to `$1, $2, ...` in order of appearance.
///
/// The text is not parsed, so a `?` written inside literal SQL is numbered
/// too; [`Query::validate`](crate::Query::validate) reports the mismatch.
/// Returns the new text and the number of placeholders rewritten.
pub(crate) fn number_placeholders(sql: &str) -> (String, usize) {
    let mut out = String::with_capacity(sql.len() + 8);
    let mut idx: usize = 0;

    for ch in sql.chars() {
        if ch == '?' {
            idx += 1;
            out.push('$');
            push_usize(&mut out, idx);
        } else {
            out.push(ch);
        }
    }

    (out, idx)
}

/// Count the `?` placeholders, matching [`number_placeholders`].
pub(crate) fn count_placeholders(sql: &str) -> usize {
    sql.matches('?').count()
}

// Write a usize as decimal digits into `out` without going through fmt.
#[inline]
fn push_usize(out: &mut String, mut n: usize) {
    if n < 10 {
        out.push((b'0' + n as u8) as char);
        return;
    }
    let mut buf = [0u8; 20];
    let mut pos = buf.len();
    while n > 0 {
        pos -= 1;
        buf[pos] = b'0' + (n % 10) as u8;
        n /= 10;
    }
    for &b in &buf[pos..] {
        out.push(b as char);
    }
}
