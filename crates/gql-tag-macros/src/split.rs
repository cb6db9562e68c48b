//! Splitting a template literal into segments and interpolation slots.

/// An interpolation slot found in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot {
    /// `${}`: take the next trailing argument.
    Positional,
    /// `${expr}`: the raw expression source.
    Inline(String),
}

/// A template split into `segments.len() == slots.len() + 1` pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Split {
    pub(crate) segments: Vec<String>,
    pub(crate) slots: Vec<Slot>,
}

/// Split `template` at every `${...}`.
///
/// `$${` is an escaped literal `${`. Braces inside the slot must balance; string and
/// char literals inside it are skipped.
pub(crate) fn split_template(template: &str) -> Result<Split, String> {
    let mut segments = Vec::new();
    let mut slots = Vec::new();
    let mut current = String::new();
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        current.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("$${") {
            current.push_str("${");
            rest = after;
        } else if let Some(after) = tail.strip_prefix("${") {
            let end = slot_end(after).ok_or_else(|| {
                format!(
                    "unterminated `${{` at byte {} of the template",
                    template.len() - tail.len()
                )
            })?;
            let source = after[..end].trim();
            slots.push(if source.is_empty() {
                Slot::Positional
            } else {
                Slot::Inline(source.to_string())
            });
            segments.push(std::mem::take(&mut current));
            rest = &after[end + 1..];
        } else {
            current.push('$');
            rest = &tail[1..];
        }
    }
    current.push_str(rest);
    segments.push(current);

    Ok(Split { segments, slots })
}

/// Byte offset of the `}` closing a slot whose body starts at `body`.
fn slot_end(body: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut chars = body.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '{' => depth += 1,
            '}' if depth == 0 => return Some(i),
            '}' => depth -= 1,
            '"' => skip_quoted(&mut chars, '"')?,
            '\'' => {
                // Lifetimes and labels have no closing quote; only skip char literals.
                let lookahead: String = body[i + 1..].chars().take(3).collect();
                if is_char_literal(&lookahead) {
                    skip_quoted(&mut chars, '\'')?;
                }
            }
            _ => {}
        }
    }
    None
}

fn is_char_literal(after_quote: &str) -> bool {
    let mut it = after_quote.chars();
    match (it.next(), it.next()) {
        (Some('\\'), _) => true,
        (Some(_), Some('\'')) => true,
        _ => false,
    }
}

fn skip_quoted(chars: &mut std::str::CharIndices<'_>, quote: char) -> Option<()> {
    while let Some((_, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return Some(());
        }
    }
    None
}
