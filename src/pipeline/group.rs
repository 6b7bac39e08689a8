use std::collections::BTreeMap;

use super::normalize::NormalizedRecord;

/// Category name → records filed under it, in fetch order.
pub type GroupedPosts = BTreeMap<String, Vec<NormalizedRecord>>;

pub fn group_posts(records: Vec<NormalizedRecord>) -> GroupedPosts {
    let mut grouped = GroupedPosts::new();
    for record in records {
        grouped
            .entry(record.category.clone())
            .or_default()
            .push(record);
    }
    grouped
}
