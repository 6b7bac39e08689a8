use crate::context::RunContext;

use super::group::GroupedPosts;
use super::normalize::NormalizedRecord;
use super::tags::MISC;

/// Alphabetical, except that `Misc` always closes the post.
pub fn sort_categories<'a, I>(categories: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<&str> = categories.into_iter().collect();
    out.sort_unstable();
    out.dedup();
    if let Some(i) = out.iter().position(|c| *c == MISC) {
        let misc = out.remove(i);
        out.push(misc);
    }
    out
}

/// Octopress front matter for the day's post.
pub fn header(ctx: &RunContext) -> String {
    format!(
        "---\n\
         layout: post\n\
         title: Link Dump for {}\n\
         date: {}\n\
         comments: false\n\
         categories: links\n\
         ---",
        ctx.date(),
        ctx.timestamp()
    )
}

/// Render the full markdown post. Pure: output depends only on the inputs.
pub fn render_post(grouped: &GroupedPosts, ctx: &RunContext) -> String {
    let mut post = header(ctx);

    for category in sort_categories(grouped.keys().map(String::as_str)) {
        post.push_str(&format!("\n# {}\n\n", category));
        for record in &grouped[category] {
            write_entry(&mut post, record);
        }
    }

    post
}

fn write_entry(post: &mut String, record: &NormalizedRecord) {
    post.push_str(&format!(
        "* [{}]({})",
        record.description.trim(),
        record.href.trim()
    ));
    if let Some(extended) = &record.extended {
        post.push_str(&format!("<br>\nExtended: {}", extended));
    }
    if !record.tags.is_empty() {
        post.push_str(&format!("<br>\n_Tags:_ {}", record.tags.join(", ")));
    }
    post.push('\n');
}
