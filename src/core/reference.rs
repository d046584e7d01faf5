//! Lookup over the embedded reference: whole topics, `topic#section`
//! fragments and regex search.

use crate::core::assets;
use crate::core::error::{CpkitError, Result};
use regex::RegexBuilder;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// A whole reference document or one section of it.
#[derive(Debug, Clone, Serialize)]
pub struct DocFragment {
    pub topic: String,
    pub r#ref: String,
    pub title: String,
    pub content: String,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub topic: &'static str,
    pub line: usize,
    pub text: String,
}

/// Split `topic#section` into its parts.
pub fn split_ref(reference: &str) -> (&str, Option<&str>) {
    match reference.split_once('#') {
        Some((topic, anchor)) => (topic, Some(anchor)),
        None => (reference, None),
    }
}

/// Fetch a document, or the section under `anchor` when given.
pub fn get_fragment(topic: &str, anchor: Option<&str>) -> Result<DocFragment> {
    let content = assets::get_doc(topic).ok_or_else(|| {
        CpkitError::NotFound(format!(
            "reference topic '{}' (available: {})",
            topic,
            assets::list_docs().join(", ")
        ))
    })?;

    let (fragment, title) = match anchor {
        Some(a) => extract_section(content, a).ok_or_else(|| {
            CpkitError::NotFound(format!("section '{}' in reference topic '{}'", a, topic))
        })?,
        None => {
            let title = assets::doc_title(topic).unwrap_or_else(|| topic.to_string());
            (content.to_string(), title)
        }
    };

    let hash = format!("{:x}", Sha256::digest(fragment.as_bytes()));
    let topic = topic.strip_suffix(".md").unwrap_or(topic).to_string();
    Ok(DocFragment {
        r#ref: match anchor {
            Some(a) => format!("{}#{}", topic, a),
            None => topic.clone(),
        },
        topic,
        title,
        content: fragment,
        hash,
    })
}

fn slugify(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Extract a markdown section by heading text or slug.
///
/// The section runs until the next heading of the same or a higher level.
/// Headings inside fenced code blocks are ignored.
pub fn extract_section(content: &str, anchor: &str) -> Option<(String, String)> {
    let wanted = slugify(anchor);
    let mut section_lines = Vec::new();
    let mut in_section = false;
    let mut in_fence = false;
    let mut section_title = String::new();
    let mut section_level = 0;

    for line in content.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
        }
        if !in_fence && line.starts_with('#') {
            let level = line.chars().take_while(|&c| c == '#').count();
            let title = line.trim_start_matches('#').trim();

            if in_section {
                if level <= section_level {
                    break;
                }
            } else if slugify(title) == wanted {
                in_section = true;
                section_title = title.to_string();
                section_level = level;
            }
        }

        if in_section {
            section_lines.push(line);
        }
    }

    if in_section {
        Some((section_lines.join("\n"), section_title))
    } else {
        None
    }
}

/// Case-insensitive regex search over every embedded document.
pub fn search(pattern: &str) -> Result<Vec<SearchHit>> {
    let re = RegexBuilder::new(pattern).case_insensitive(true).build()?;
    let mut hits = Vec::new();
    for topic in assets::list_docs() {
        let Some(content) = assets::get_doc(topic) else {
            continue;
        };
        for (idx, line) in content.lines().enumerate() {
            if re.is_match(line) {
                hits.push(SearchHit {
                    topic,
                    line: idx + 1,
                    text: line.to_string(),
                });
            }
        }
    }
    Ok(hits)
}
