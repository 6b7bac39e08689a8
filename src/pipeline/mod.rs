pub mod group;
pub mod normalize;
pub mod render;
pub mod tags;

use tracing::info;

use crate::context::RunContext;
use crate::fetcher::RawRecord;

pub struct Post {
    pub body: String,
    pub links: usize,
    pub categories: usize,
}

/// raw bookmarks → cleaned records → category buckets → markdown.
pub fn build_post(raw: &[RawRecord], ctx: &RunContext) -> Post {
    let records = normalize::normalize_all(raw);
    info!(
        "Kept {} shared bookmarks, dropped {} private",
        records.len(),
        raw.len() - records.len()
    );

    let links = records.len();
    let grouped = group::group_posts(records);
    info!("Grouped into {} categories", grouped.len());

    Post {
        body: render::render_post(&grouped, ctx),
        links,
        categories: grouped.len(),
    }
}

// ── Tests ──
