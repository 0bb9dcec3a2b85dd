//! Prompt template rendering.
//!
//! Templates use a small placeholder syntax:
//! - `{{variable}}` is replaced with the value of `variable`, or removed if unset
//! - `{{#if variable}}...{{/if}}` keeps its body only if `variable` is set and non-empty
//! - `{{#if variable}}...{{else}}...{{/if}}` with an alternative branch
//!
//! Conditionals may nest.

use std::collections::HashMap;

use super::error::PromptError;

/// A template string ready to be instantiated with arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
}

enum Tag<'a> {
    Var(&'a str),
    If(&'a str),
    Else,
    EndIf,
}

fn parse_tag(inner: &str) -> Tag<'_> {
    let inner = inner.trim();
    if let Some(var) = inner.strip_prefix("#if ") {
        Tag::If(var.trim())
    } else if inner == "else" {
        Tag::Else
    } else if inner == "/if" {
        Tag::EndIf
    } else {
        Tag::Var(inner)
    }
}

/// One open `{{#if}}` block.
struct Frame {
    /// Whether the enclosing output was active when the block opened.
    parent_active: bool,
    condition: bool,
    in_else: bool,
}

impl Frame {
    fn active(&self) -> bool {
        self.parent_active && (self.condition != self.in_else)
    }
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut out = String::with_capacity(self.text.len());
        let mut stack: Vec<Frame> = Vec::new();
        let mut rest = self.text.as_str();

        let is_set = |name: &str| arguments.get(name).is_some_and(|v| !v.is_empty());

        while let Some(open) = rest.find("{{") {
            let active = stack.last().is_none_or(Frame::active);
            if active {
                out.push_str(&rest[..open]);
            }

            let after_open = &rest[open + 2..];
            let close = after_open
                .find("}}")
                .ok_or_else(|| PromptError::template("Unclosed '{{' tag"))?;

            match parse_tag(&after_open[..close]) {
                Tag::Var(name) => {
                    if active {
                        if let Some(value) = arguments.get(name) {
                            out.push_str(value);
                        }
                    }
                }
                Tag::If(name) => stack.push(Frame {
                    parent_active: active,
                    condition: is_set(name),
                    in_else: false,
                }),
                Tag::Else => {
                    let frame = stack
                        .last_mut()
                        .ok_or_else(|| PromptError::template("{{else}} outside {{#if}}"))?;
                    if frame.in_else {
                        return Err(PromptError::template("Duplicate {{else}} in {{#if}} block"));
                    }
                    frame.in_else = true;
                }
                Tag::EndIf => {
                    stack
                        .pop()
                        .ok_or_else(|| PromptError::template("{{/if}} without {{#if}}"))?;
                }
            }

            rest = &after_open[close + 2..];
        }

        if !stack.is_empty() {
            return Err(PromptError::template("Missing {{/if}} tag"));
        }
        out.push_str(rest);

        Ok(out)
    }
}
