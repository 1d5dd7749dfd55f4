//! The `[CATEGORY] name` text convention, plus the category tables.
//!
//! The backing store only has one text field per item, so the category travels
//! as a bracketed uppercase prefix. [`parse`] and [`format`] are the only places
//! that know about the brackets; everything else works with [`ItemText`].

/// Label of the synthetic group holding items without a tag.
pub const UNCATEGORIZED_LABEL: &str = "UNCATEGORIZED";

/// Emoji shown on the uncategorized header.
pub const UNCATEGORIZED_EMOJI: &str = "📝";

/// Emoji for categories missing from [`CATEGORY_EMOJI`].
pub const FALLBACK_EMOJI: &str = "📦";

/// Built-in display order.
pub const DEFAULT_CATEGORY_ORDER: [&str; 11] = [
    "PRODUCE",
    "MEAT",
    "DAIRY",
    "FROZEN",
    "BAKERY",
    "PANTRY",
    "BEVERAGES",
    "SNACKS",
    "HEALTH",
    "HOUSEHOLD",
    "OTHER",
];

const CATEGORY_EMOJI: [(&str, &str); 11] = [
    ("PRODUCE", "🥬"),
    ("MEAT", "🥩"),
    ("DAIRY", "🧀"),
    ("FROZEN", "🧊"),
    ("BAKERY", "🍞"),
    ("PANTRY", "🥫"),
    ("BEVERAGES", "☕"),
    ("SNACKS", "🍿"),
    ("HEALTH", "💊"),
    ("HOUSEHOLD", "🏠"),
    ("OTHER", "📦"),
];

/// Item text split into its category tag and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemText {
    pub category: Option<String>,
    pub name: String,
}

/// Split `[CATEGORY] name` into its parts.
///
/// The tag must be one or more ASCII uppercase letters in brackets at the very
/// start. Whitespace after the bracket is dropped. Anything else, including a
/// multi-line remainder, is an untagged name.
pub fn parse(text: &str) -> ItemText {
    let untagged = || ItemText {
        category: None,
        name: text.to_owned(),
    };

    let Some(rest) = text.strip_prefix('[') else {
        return untagged();
    };
    let Some(close) = rest.find(']') else {
        return untagged();
    };
    let tag = &rest[..close];
    if tag.is_empty() || !tag.bytes().all(|b| b.is_ascii_uppercase()) {
        return untagged();
    }
    let name = rest[close + 1..].trim_start();
    if name.contains('\n') {
        return untagged();
    }

    ItemText {
        category: Some(tag.to_owned()),
        name: name.to_owned(),
    }
}

/// Encode a category and name back into item text.
pub fn format(category: &str, name: &str) -> String {
    format!("[{category}] {name}")
}

/// Clean up a category label from outside (config, categorizer output).
///
/// Trims and uppercases; returns `None` unless the result is a valid tag.
pub fn normalize_label(label: &str) -> Option<String> {
    let label = label.trim().trim_start_matches('[').trim_end_matches(']');
    let label = label.to_ascii_uppercase();
    if label.is_empty() || !label.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    Some(label)
}

/// Emoji for a category label. Unknown labels get [`FALLBACK_EMOJI`].
pub fn emoji_for(category: &str) -> &'static str {
    CATEGORY_EMOJI
        .iter()
        .find(|(label, _)| *label == category)
        .map_or(FALLBACK_EMOJI, |(_, emoji)| emoji)
}

/// The default order as owned strings.
pub fn default_order() -> Vec<String> {
    DEFAULT_CATEGORY_ORDER.iter().map(|c| (*c).to_owned()).collect()
}

/// Uppercase a leading ASCII letter, the way renamed items are presented.
///
/// Any other leading character (digit, punctuation, non-ASCII) is left as is.
pub fn capitalize_first(name: &str) -> String {
    let name = name.trim();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => std::iter::once(first.to_ascii_uppercase()).chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_tagged() {
        assert_eq!(
            parse("[DAIRY] Milk"),
            ItemText {
                category: Some("DAIRY".into()),
                name: "Milk".into()
            }
        );
    }

    #[test]
    fn parse_tag_without_space() {
        let parsed = parse("[MEAT]Bacon");
        assert_eq!(parsed.category.as_deref(), Some("MEAT"));
        assert_eq!(parsed.name, "Bacon");
    }

    #[test]
    fn parse_untagged() {
        let parsed = parse("Bread");
        assert!(parsed.category.is_none());
        assert_eq!(parsed.name, "Bread");
    }

    #[test]
    fn parse_rejects_lowercase_or_empty_tag() {
        assert!(parse("[dairy] Milk").category.is_none());
        assert!(parse("[] Milk").category.is_none());
        assert!(parse("[DAIRY2] Milk").category.is_none());
        assert_eq!(parse("[dairy] Milk").name, "[dairy] Milk");
    }

    #[test]
    fn parse_requires_leading_bracket() {
        assert!(parse(" [DAIRY] Milk").category.is_none());
        assert!(parse("Milk [DAIRY]").category.is_none());
        assert!(parse("[DAIRY Milk").category.is_none());
    }

    #[test]
    fn parse_tag_only() {
        let parsed = parse("[SNACKS]");
        assert_eq!(parsed.category.as_deref(), Some("SNACKS"));
        assert_eq!(parsed.name, "");
    }

    #[test]
    fn format_then_parse() {
        let text = format("BAKERY", "Sourdough");
        assert_eq!(text, "[BAKERY] Sourdough");
        assert_eq!(parse(&text).name, "Sourdough");
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_label(" dairy ").as_deref(), Some("DAIRY"));
        assert_eq!(normalize_label("[SNACKS]").as_deref(), Some("SNACKS"));
        assert!(normalize_label("").is_none());
        assert!(normalize_label("frozen food").is_none());
    }

    #[test]
    fn emoji_lookup() {
        assert_eq!(emoji_for("DAIRY"), "🧀");
        assert_eq!(emoji_for("GARDEN"), FALLBACK_EMOJI);
    }

    #[test]
    fn capitalize() {
        assert_eq!(capitalize_first("  milk "), "Milk");
        assert_eq!(capitalize_first("élan"), "élan");
        assert_eq!(capitalize_first("2 lemons"), "2 lemons");
        assert_eq!(capitalize_first(""), "");
    }
}
