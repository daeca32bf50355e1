//! Minimal reader for `@tag description` blocks in JSDoc comments.

use super::tag::strip_jsdoc_prefix;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsDocTag {
    /// Tag name without the leading `@`.
    pub name: String,
    pub description: String,
}

impl JsDocTag {
    pub fn has_value(&self) -> bool {
        !self.description.is_empty()
    }
}

/// Read every tag of a JSDoc comment text (the part between `/*` and `*/`).
///
/// Lines that do not open a tag extend the description of the previous tag;
/// text before the first tag is the comment's own description and is skipped.
pub fn parse_jsdoc_tags(text: &str) -> Vec<JsDocTag> {
    let mut tags: Vec<JsDocTag> = Vec::new();

    for line in text.lines() {
        let content = strip_jsdoc_prefix(line);
        if content.is_empty() {
            continue;
        }

        if let Some(rest) = content.strip_prefix('@') {
            let name_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
            if name_len == 0 {
                continue;
            }
            tags.push(JsDocTag {
                name: rest[..name_len].to_string(),
                description: rest[name_len..].trim().to_string(),
            });
            continue;
        }

        if let Some(current) = tags.last_mut() {
            if !current.description.is_empty() {
                current.description.push('\n');
            }
            current.description.push_str(content);
        }
    }

    tags
}
