//! Lightweight body "compilation": structural checks only.

use std::iter::Peekable;
use std::str::Chars;

use stubgen_core::{ReturnType, TypeKind};

/// Check delimiter balance outside literals and comments, and the statement
/// terminator. Whitespace-only bodies are accepted.
pub fn check_body(body: &str) -> Result<(), String> {
    let mut open: Vec<char> = Vec::new();
    // Last character of code, ignoring whitespace and comments.
    let mut last = None;
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
                continue;
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                skip_block_comment(&mut chars)?;
                continue;
            }
            '"' | '\'' => skip_literal(&mut chars, c)?,
            '(' | '[' | '{' => open.push(c),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if open.pop() != Some(expected) {
                    return Err(format!("unbalanced '{c}'"));
                }
            }
            _ => {}
        }
        if !c.is_whitespace() {
            last = Some(c);
        }
    }
    if let Some(c) = open.last() {
        return Err(format!("unclosed '{c}'"));
    }
    match last {
        None | Some(';') | Some('}') => Ok(()),
        Some(_) => Err("missing ';' or '}' at end of body".to_string()),
    }
}

fn skip_block_comment(chars: &mut Peekable<Chars<'_>>) -> Result<(), String> {
    while let Some(c) = chars.next() {
        if c == '*' && chars.peek() == Some(&'/') {
            chars.next();
            return Ok(());
        }
    }
    Err("unterminated block comment".to_string())
}

fn skip_literal(chars: &mut Peekable<Chars<'_>>, quote: char) -> Result<(), String> {
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return Ok(());
        }
    }
    Err(format!("unterminated literal opened with {quote}"))
}

/// The trivial body an editor installs when asked for its default.
pub fn trivial_body(return_type: Option<&ReturnType>) -> String {
    match return_type {
        None => "{}".to_string(),
        Some(ty) => match ty.kind {
            TypeKind::Void => "{}".to_string(),
            TypeKind::Primitive if ty.name == "boolean" => "return false;".to_string(),
            TypeKind::Primitive => "return 0;".to_string(),
            TypeKind::Array | TypeKind::Enum | TypeKind::Reference => "return null;".to_string(),
        },
    }
}
