use std::io::{self, Write};

use anyhow::Context;
use gallery_app::usecases::{FeedSnapshot, FetchOutcome};
use gallery_app::UseCases;
use gallery_core::ListingStatus;

use crate::cli::ListArgs;

/// How many pages `list` loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLimit {
    /// At most this many pages; the first page is always loaded.
    Pages(usize),
    /// Until the last page.
    All,
}

impl PageLimit {
    fn allows_more(self, loaded: usize) -> bool {
        match self {
            PageLimit::Pages(max) => loaded < max,
            PageLimit::All => true,
        }
    }
}

impl From<&ListArgs> for PageLimit {
    fn from(args: &ListArgs) -> Self {
        if args.all {
            PageLimit::All
        } else {
            PageLimit::Pages(args.pages)
        }
    }
}

/// Mounts a feed and follows cursors up to `limit`.
///
/// A failed first page is an error. A failed later page stops paging and
/// keeps what was loaded; the snapshot carries `next_page_failed`.
#[tracing::instrument(name = "command.list_images", skip(usecases))]
pub async fn list_images(usecases: &UseCases<'_>, limit: PageLimit) -> anyhow::Result<FeedSnapshot> {
    let feed = usecases.image_feed();

    if let FetchOutcome::Failed(e) = feed.mount().await {
        return Err(e).context("Failed to load images");
    }

    let mut loaded = 1;
    while limit.allows_more(loaded) && feed.snapshot().has_next_page {
        match feed.fetch_next_page().await {
            FetchOutcome::Fetched { .. } => loaded += 1,
            FetchOutcome::Failed(e) => {
                tracing::warn!(error = %e, loaded, "Stopped paging after a failed page");
                break;
            }
            FetchOutcome::Skipped | FetchOutcome::Stale => break,
        }
    }

    tracing::info!(pages = loaded, images = feed.snapshot().images.len(), "Listed images");
    Ok(feed.snapshot())
}

/// Plain-text rendering: one image per line, then a paging hint.
pub fn render_images(snapshot: &FeedSnapshot, out: &mut impl Write) -> io::Result<()> {
    match snapshot.status {
        ListingStatus::Loading => return writeln!(out, "Loading..."),
        ListingStatus::Error => return writeln!(out, "Could not load images."),
        ListingStatus::Ready => {}
    }

    if snapshot.images.is_empty() {
        writeln!(out, "No images yet.")?;
    }
    for image in &snapshot.images {
        writeln!(out, "{}\t{}\t{}", image.title, image.url, image.description)?;
    }
    if snapshot.next_page_failed {
        writeln!(out, "Loading more images failed.")?;
    } else if snapshot.has_next_page {
        writeln!(out, "More images available (use --pages or --all).")?;
    }
    Ok(())
}
