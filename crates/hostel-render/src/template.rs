//! Mustache-style template expansion.

use crate::source::TemplateSource;

/// Errors raised while expanding a template.
///
/// A malformed template aborts the whole render; no partial output is
/// ever returned.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// A `{{` without a matching `}}`.
    #[error("unterminated tag at byte {0}")]
    UnterminatedTag(usize),

    /// A `{{#name}}` without a matching `{{/name}}`.
    #[error("unclosed section {{{{#{0}}}}}")]
    UnclosedSection(String),

    /// A `{{/name}}` that closes nothing, or closes the wrong section.
    #[error("unexpected section close {{{{/{0}}}}}")]
    UnmatchedClose(String),
}

/// One lexed template element.
#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Variable(&'a str),
    Open(&'a str),
    Close(&'a str),
}

/// Expand `template` against `source`.
///
/// Variables interpolate the resolved value verbatim; sections repeat
/// their block once per item the source yields. See [`TemplateSource`]
/// for the callback contract.
pub fn expand(template: &str, source: &mut dyn TemplateSource) -> Result<String, TemplateError> {
    let tokens = tokenize(template)?;
    let mut out = String::with_capacity(template.len());
    let consumed = expand_tokens(&tokens, source, &mut out)?;
    // expand_tokens stops early only on an unmatched close.
    debug_assert_eq!(consumed, tokens.len());
    Ok(out)
}

/// Lex the template into text, variable, and section tokens.
fn tokenize(template: &str) -> Result<Vec<Token<'_>>, TemplateError> {
    let mut tokens = Vec::new();
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find("{{") {
        if start > 0 {
            tokens.push(Token::Text(&rest[..start]));
        }
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            return Err(TemplateError::UnterminatedTag(offset + start));
        };
        let name = after[..end].trim();
        tokens.push(match name.strip_prefix('#') {
            Some(section) => Token::Open(section.trim_start()),
            None => match name.strip_prefix('/') {
                Some(section) => Token::Close(section.trim_start()),
                None => Token::Variable(name),
            },
        });
        offset += start + 2 + end + 2;
        rest = &after[end + 2..];
    }
    if !rest.is_empty() {
        tokens.push(Token::Text(rest));
    }
    Ok(tokens)
}

/// Expand a token run until its end or an enclosing section close.
///
/// Returns the index of the first unconsumed token (the close of the
/// enclosing section, or `tokens.len()` at top level).
fn expand_tokens(
    tokens: &[Token<'_>],
    source: &mut dyn TemplateSource,
    out: &mut String,
) -> Result<usize, TemplateError> {
    let mut ix = 0;
    while ix < tokens.len() {
        match tokens[ix] {
            Token::Text(text) => out.push_str(text),
            Token::Variable(name) => out.push_str(&source.resolve(name)),
            Token::Open(name) => {
                let end = find_close(tokens, ix + 1, name)?;
                let block = &tokens[ix + 1..end];
                if source.enter_section(name) {
                    loop {
                        expand_tokens(block, source, out)?;
                        if !source.next_item() {
                            break;
                        }
                    }
                    source.leave_section();
                }
                ix = end;
            }
            Token::Close(name) => return Err(TemplateError::UnmatchedClose(name.to_owned())),
        }
        ix += 1;
    }
    Ok(ix)
}

/// Find the close matching the section opened just before `from`,
/// skipping over nested sections.
fn find_close(tokens: &[Token<'_>], from: usize, name: &str) -> Result<usize, TemplateError> {
    let mut depth = 0usize;
    for (ix, token) in tokens.iter().enumerate().skip(from) {
        match token {
            Token::Open(_) => depth += 1,
            Token::Close(close) => {
                if depth > 0 {
                    depth -= 1;
                } else if *close == name {
                    return Ok(ix);
                } else {
                    return Err(TemplateError::UnmatchedClose((*close).to_owned()));
                }
            }
            Token::Text(_) | Token::Variable(_) => {}
        }
    }
    Err(TemplateError::UnclosedSection(name.to_owned()))
}
