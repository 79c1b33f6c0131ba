//! Leading `---` metadata blocks.

use serde_yaml::Value;

/// The fields of a metadata block this toolchain consumes. Everything else
/// in the block is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: Option<String>,
    pub tags: Vec<String>,
}

/// A document split into its metadata and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<'a> {
    pub metadata: Metadata,
    pub body: &'a str,
}

/// Splits `content` into metadata and body.
///
/// A document without a leading `---` line has empty metadata and the whole
/// content as body.
///
/// # Errors
/// Returns a description of the problem when the block has no closing marker,
/// is not valid YAML, or is not a mapping.
pub fn split(content: &str) -> Result<Split<'_>, String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return Ok(no_block(content));
    };
    if first.trim_end() != "---" {
        return Ok(no_block(content));
    }

    let block_start = first.len();
    let mut offset = block_start;
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            let yaml = &content[block_start..offset];
            let body = &content[offset + line.len()..];
            let metadata = parse_block(yaml)?;
            return Ok(Split { metadata, body });
        }
        offset += line.len();
    }

    Err("missing closing `---` marker".to_string())
}

fn no_block(content: &str) -> Split<'_> {
    Split {
        metadata: Metadata::default(),
        body: content,
    }
}

fn parse_block(yaml: &str) -> Result<Metadata, String> {
    if yaml.trim().is_empty() {
        return Ok(Metadata::default());
    }

    let value: Value = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
    match value {
        Value::Null => Ok(Metadata::default()),
        Value::Mapping(map) => Ok(Metadata {
            title: map.get("title").and_then(scalar_text),
            tags: map.get("tags").map(tag_list).unwrap_or_default(),
        }),
        _ => Err("metadata block is not a key-value mapping".to_string()),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn tag_list(value: &Value) -> Vec<String> {
    let raw: Vec<String> = match value {
        Value::Sequence(items) => items.iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    };

    let mut tags: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        let tag = tag.trim_start_matches('#').to_string();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_block() {
        let input = "---\ntitle: Graph Notes\ntags:\n  - graph\n  - '#vault'\nstatus: draft\n---\n# Heading\nBody";
        let split = split(input).unwrap();
        assert_eq!(split.metadata.title.as_deref(), Some("Graph Notes"));
        assert_eq!(split.metadata.tags, vec!["graph", "vault"]);
        assert_eq!(split.body, "# Heading\nBody");
    }

    #[test]
    fn no_block_keeps_whole_body() {
        let input = "# Title\n---\nnot metadata";
        let split = split(input).unwrap();
        assert_eq!(split.metadata, Metadata::default());
        assert_eq!(split.body, input);
    }

    #[test]
    fn bom_and_crlf() {
        let input = "\u{feff}---\r\ntitle: X\r\n---\r\nbody";
        let split = split(input).unwrap();
        assert_eq!(split.metadata.title.as_deref(), Some("X"));
        assert_eq!(split.body, "body");
    }

    #[test]
    fn missing_closing_marker_is_error() {
        assert!(split("---\ntitle: X\nbody [[a]]").is_err());
    }

    #[test]
    fn unquoted_wikilink_scalar_is_error() {
        assert!(split("---\nrelated: [[a]] and more\n---\nbody").is_err());
    }

    #[test]
    fn scalar_tag_becomes_list() {
        let split = split("---\ntags: solo\n---\n").unwrap();
        assert_eq!(split.metadata.tags, vec!["solo"]);
        assert_eq!(split.body, "");
    }

    #[test]
    fn non_mapping_block_is_error() {
        assert!(split("---\n- a\n- b\n---\nbody").is_err());
    }
}
