use std::sync::LazyLock;

use regex::Regex;

/// `mt:<topic>` names the section a bookmark is filed under.
static MAIN_TOPIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^mt:([^:]*)").unwrap());

/// Workflow markers that never belong in the post, e.g. "blog this".
pub const EXCLUDED_TAGS: &[&str] = &["@Blog"];

pub const MISC: &str = "Misc";

#[derive(Debug, PartialEq, Eq)]
pub enum TagKind<'a> {
    Excluded,
    MainTopic(&'a str),
    Ordinary(&'a str),
}

pub fn classify(token: &str) -> TagKind<'_> {
    if EXCLUDED_TAGS.contains(&token) {
        return TagKind::Excluded;
    }
    match MAIN_TOPIC_RE.captures(token).and_then(|c| c.get(1)) {
        Some(topic) => TagKind::MainTopic(topic.as_str()),
        None => TagKind::Ordinary(token),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categorized {
    pub category: String,
    pub tags: Vec<String>,
}

/// Split a raw tag string and derive the record's category.
///
/// The category comes from the last non-empty `mt:` tag, else from the first
/// ordinary tag, else falls back to [`MISC`]. When more than one ordinary tag
/// remains, the first one whose label equals the category is dropped so the
/// category is not repeated in the tag line.
pub fn categorize(raw: &str) -> Categorized {
    let mut topic: Option<&str> = None;
    let mut tags: Vec<String> = Vec::new();

    for token in raw.split_whitespace() {
        match classify(token) {
            TagKind::Excluded => {}
            TagKind::MainTopic(t) if t.is_empty() => {}
            TagKind::MainTopic(t) => topic = Some(t),
            TagKind::Ordinary(t) => tags.push(t.to_string()),
        }
    }

    let category = topic
        .or_else(|| tags.first().map(String::as_str))
        .map(display_label)
        .unwrap_or_else(|| MISC.to_string());

    if tags.len() > 1 {
        if let Some(i) = tags.iter().position(|t| display_label(t) == category) {
            tags.remove(i);
        }
    }

    Categorized { category, tags }
}

/// Human-readable form of a tag: underscores become spaces, then title case.
pub fn display_label(tag: &str) -> String {
    title_case(&tag.replace('_', " "))
}

/// Upper-case a letter that follows a non-letter, lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;
    for c in s.chars() {
        if prev_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_letter = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(raw: &str) -> (String, Vec<String>) {
        let c = categorize(raw);
        (c.category, c.tags)
    }

    #[test]
    fn main_topic_wins_and_excluded_dropped() {
        assert_eq!(
            cat("mt:Cooking kitchen_tips @Blog"),
            ("Cooking".into(), vec!["kitchen_tips".to_string()])
        );
    }

    #[test]
    fn first_tag_becomes_category_and_is_pruned() {
        assert_eq!(
            cat("food food_blog"),
            ("Food".into(), vec!["food_blog".to_string()])
        );
    }

    #[test]
    fn single_tag_kept_even_when_equal_to_category() {
        assert_eq!(cat("food"), ("Food".into(), vec!["food".to_string()]));
    }

    #[test]
    fn main_topic_prunes_matching_ordinary_tag() {
        assert_eq!(
            cat("mt:web_design web_design css"),
            ("Web Design".into(), vec!["css".to_string()])
        );
        // Only one ordinary tag left, so it stays.
        assert_eq!(
            cat("mt:css css"),
            ("Css".into(), vec!["css".to_string()])
        );
    }

    #[test]
    fn falls_back_to_misc() {
        assert_eq!(cat(""), ("Misc".into(), vec![]));
        assert_eq!(cat("@Blog"), ("Misc".into(), vec![]));
        assert_eq!(cat("mt:"), ("Misc".into(), vec![]));
    }

    #[test]
    fn last_main_topic_wins() {
        assert_eq!(cat("mt:art mt:music").0, "Music");
        assert_eq!(cat("mt:art mt:").0, "Art");
    }

    #[test]
    fn main_topic_stops_at_second_colon() {
        assert_eq!(classify("mt:rust:async"), TagKind::MainTopic("rust"));
        assert_eq!(classify("rust:async"), TagKind::Ordinary("rust:async"));
        assert_eq!(classify("@Blog"), TagKind::Excluded);
        assert_eq!(classify("@blog"), TagKind::Ordinary("@blog"));
    }

    #[test]
    fn title_case_follows_letter_boundaries() {
        assert_eq!(title_case("kitchen tips"), "Kitchen Tips");
        assert_eq!(title_case("3d printing"), "3D Printing");
        assert_eq!(title_case("SQL"), "Sql");
        assert_eq!(title_case("c++ tricks"), "C++ Tricks");
        assert_eq!(display_label("machine_learning"), "Machine Learning");
    }
}
