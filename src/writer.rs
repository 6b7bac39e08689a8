use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::context::RunContext;
use crate::error::{Error, Result};

const POSTS_DIR: &str = "source/_posts";

/// `<octopress>/source/_posts/<date>-link-dump-for-<date>.markdown`
pub fn post_path(octopress: &Path, ctx: &RunContext) -> PathBuf {
    let date = ctx.date();
    octopress
        .join(POSTS_DIR)
        .join(format!("{}-link-dump-for-{}.markdown", date, date))
}

/// Write the post, replacing any file already at the path. Never creates directories.
pub fn write_post(octopress: &Path, body: &str, ctx: &RunContext) -> Result<PathBuf> {
    let path = post_path(octopress, ctx);
    fs::write(&path, body).map_err(|e| Error::file_system(&path, e))?;
    info!("Wrote {} bytes to {}", body.len(), path.display());
    Ok(path)
}
