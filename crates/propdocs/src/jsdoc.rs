use crate::model::JsDocTag;

/// Structured representation of a parsed JSDoc comment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedJsDoc {
    /// Text before the first tag, lines joined with `\n`.
    pub summary: String,
    /// Tags in declaration order.
    pub tags: Vec<JsDocTag>,
}

impl ParsedJsDoc {
    /// Returns `true` if the comment does not contain any meaningful data.
    pub fn is_empty(&self) -> bool {
        self.summary.trim().is_empty() && self.tags.is_empty()
    }

    /// Whether a tag with the given title is present.
    pub fn has_tag(&self, title: &str) -> bool {
        self.tags.iter().any(|tag| tag.title == title)
    }
}

/// Tags whose first word after the optional `{type}` is an identifier.
const NAMED_TAGS: &[&str] = &["param", "arg", "argument", "property", "prop"];

/// Parse a JSDoc block (without comment delimiters) into structured data.
///
/// Grammar: summary lines up to the first line starting with `@`, then one
/// tag per `@` line, `@title {type} name description` for named tags and
/// `@title {type} description` for the rest. Lines that do not start with
/// `@` continue the previous tag's description.
pub fn parse_jsdoc(raw: &str) -> ParsedJsDoc {
    let mut summary_lines = Vec::new();
    let mut tags: Vec<JsDocTag> = Vec::new();
    let mut in_tags = false;

    for line in normalize_lines(raw) {
        if let Some(rest) = line.strip_prefix('@') {
            in_tags = true;
            let (title, payload) = split_tag_payload(rest);
            tags.push(parse_tag(title, payload));
            continue;
        }

        if !in_tags {
            summary_lines.push(line);
            continue;
        }

        if let Some(tag) = tags.last_mut() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match tag.description.as_mut() {
                Some(description) => {
                    description.push('\n');
                    description.push_str(line);
                }
                None => tag.description = Some(line.to_string()),
            }
        }
    }

    ParsedJsDoc {
        summary: compose_summary(summary_lines),
        tags,
    }
}

/// Comment text with the leading `*` gutter removed, tags included.
pub fn clean_comment(raw: &str) -> String {
    compose_summary(normalize_lines(raw))
}

fn parse_tag(title: &str, payload: &str) -> JsDocTag {
    let mut tag = JsDocTag::new(title);
    let (type_hint, rest) = parse_type_and_rest(payload);
    tag.type_hint = type_hint;

    let rest = rest.unwrap_or_default();
    if NAMED_TAGS.contains(&title) {
        let mut parts = rest.splitn(2, char::is_whitespace);
        if let Some(name) = parts.next().filter(|name| !name.is_empty()) {
            tag.name = Some(name.trim_matches(|c| c == '[' || c == ']').to_string());
        }
        tag.description = parts
            .next()
            .map(|description| description.trim().trim_start_matches("- ").to_string())
            .filter(|description| !description.is_empty());
    } else if !rest.trim().is_empty() {
        tag.description = Some(rest.trim().to_string());
    }
    tag
}

fn normalize_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| {
            let line = line.trim();
            let line = line.strip_prefix('*').unwrap_or(line);
            line.trim().to_string()
        })
        .collect()
}

fn compose_summary(lines: Vec<String>) -> String {
    let mut lines: Vec<String> = lines
        .into_iter()
        .skip_while(|line| line.trim().is_empty())
        .collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

fn split_tag_payload(input: &str) -> (&str, &str) {
    let mut parts = input.splitn(2, char::is_whitespace);
    let tag = parts.next().unwrap_or("");
    let payload = parts.next().unwrap_or("").trim();
    (tag, payload)
}

fn parse_type_and_rest(payload: &str) -> (Option<String>, Option<String>) {
    let trimmed = payload.trim();
    if let Some(stripped) = trimmed.strip_prefix('{') {
        if let Some((ty, rest)) = stripped.split_once('}') {
            let ty = ty.trim();
            let rest = rest.trim();
            let ty = (!ty.is_empty()).then(|| ty.to_string());
            let rest = (!rest.is_empty()).then(|| rest.to_string());
            return (ty, rest);
        }
    }
    let rest = (!trimmed.is_empty()).then(|| trimmed.to_string());
    (None, rest)
}
