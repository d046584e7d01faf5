//! Embedded reference documents and scaffolding templates.
//!
//! Everything is baked into the binary with `include_str!`, so `cpkit ref`
//! and `cpkit new` work without any files next to the executable.

/// Embed reference documents at compile time as text.
///
/// Generates:
/// - Public constants for each embedded document
/// - `get_doc(topic)` function for lookup
/// - `list_docs()` function for discovery, in reading order
macro_rules! embedded_docs {
    ($($topic:literal => $const_name:ident),* $(,)?) => {
        $(
            pub const $const_name: &str =
                include_str!(concat!("../../reference/", $topic, ".md"));
        )*

        pub fn get_doc(topic: &str) -> Option<&'static str> {
            // Accept "io" as well as "io.md"
            let key = topic.strip_suffix(".md").unwrap_or(topic);
            match key {
                $( $topic => Some($const_name), )*
                _ => None,
            }
        }

        pub fn list_docs() -> Vec<&'static str> {
            vec![ $( $topic, )* ]
        }
    };
}

embedded_docs! {
    "io" => REF_IO,
    "types" => REF_TYPES,
    "collections" => REF_COLLECTIONS,
    "strings" => REF_STRINGS,
    "math" => REF_MATH,
    "iterators" => REF_ITERATORS,
    "algorithms" => REF_ALGORITHMS,
    "tricks" => REF_TRICKS,
}

/// Title of a document: its first `# ` heading, or the topic key.
pub fn doc_title(topic: &str) -> Option<String> {
    let content = get_doc(topic)?;
    let title = content
        .lines()
        .find_map(|l| l.strip_prefix("# "))
        .map(|t| t.trim().to_string())
        .unwrap_or_else(|| topic.to_string());
    Some(title)
}

// Boilerplate written by `cpkit new`
pub const TEMPLATE_SOLUTION: &str = include_str!("../../templates/solution.rs");
pub const TEMPLATE_CONFIG: &str = include_str!("../../templates/cpkit.toml");
pub const TEMPLATE_INPUT: &str = include_str!("../../templates/input.txt");

pub fn get_template(name: &str) -> Option<&'static str> {
    match name {
        "solution.rs" => Some(TEMPLATE_SOLUTION),
        "cpkit.toml" => Some(TEMPLATE_CONFIG),
        "input.txt" => Some(TEMPLATE_INPUT),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_doc_resolves() {
        for topic in list_docs() {
            let content = get_doc(topic).expect("listed doc should be embedded");
            assert!(content.starts_with("# "), "{} has no title", topic);
        }
    }

    #[test]
    fn test_md_suffix_accepted() {
        assert_eq!(get_doc("io.md"), get_doc("io"));
        assert!(get_doc("nope").is_none());
    }

    #[test]
    fn test_templates_embedded() {
        for name in ["solution.rs", "cpkit.toml", "input.txt"] {
            assert!(!get_template(name).unwrap().trim().is_empty());
        }
        assert!(get_template("Cargo.toml").is_none());
    }

    #[test]
    fn test_template_config_parses() {
        crate::core::config::parse_config(TEMPLATE_CONFIG).expect("template config is valid");
    }
}
