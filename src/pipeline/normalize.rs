use crate::fetcher::RawRecord;

use super::tags::categorize;

const SHARED: &str = "yes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub href: String,
    pub description: String,
    pub extended: Option<String>,
    pub tags: Vec<String>,
    pub category: String,
}

/// Lossy ASCII policy: every non-ASCII character is dropped, never replaced.
///
/// The post is published as plain ASCII markdown, so accents and symbols
/// vanish ("Café" becomes "Caf") instead of failing the run.
pub fn ascii_lossy(s: &str) -> String {
    s.chars().filter(char::is_ascii).collect()
}

/// Clean one record. Returns `None` for bookmarks that are not shared.
pub fn normalize_record(raw: &RawRecord) -> Option<NormalizedRecord> {
    if raw.shared != SHARED {
        return None;
    }

    let mut description = ascii_lossy(&raw.description);
    if description.trim().is_empty() {
        description = raw.href.clone();
    }

    let extended = ascii_lossy(&raw.extended);
    let extended = match extended.trim() {
        "" => None,
        text => Some(text.to_string()),
    };

    let categorized = categorize(&ascii_lossy(&raw.tags));

    Some(NormalizedRecord {
        href: raw.href.clone(),
        description,
        extended,
        tags: categorized.tags,
        category: categorized.category,
    })
}

/// Clean every record, keeping input order and dropping private bookmarks.
pub fn normalize_all(raw: &[RawRecord]) -> Vec<NormalizedRecord> {
    raw.iter().filter_map(normalize_record).collect()
}
