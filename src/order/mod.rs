pub mod chunker;
pub mod page_count;
pub mod render;
pub mod series;

use crate::config::Settings;
use crate::error::OrderError;
use chunker::Chunker;
use page_count::{PageCount, parse_page_count};
use render::PrintPlan;
use std::num::NonZeroUsize;
use tracing::debug;

impl PrintPlan {
    pub fn build(pages: PageCount, chunk_size: NonZeroUsize) -> Self {
        let order = series::generate(pages);
        let chunks = Chunker::chunk(&order, chunk_size);
        Self { pages, order, chunks }
    }
}

/// Validates raw input and renders the page order the way `settings` asks for.
pub fn respond(raw: &str, settings: &Settings) -> Result<String, OrderError> {
    let pages = parse_page_count(raw, settings.max_pages).inspect_err(|e| {
        debug!(input = raw.trim(), error = %e, "rejected page count");
    })?;
    let chunk_size = Chunker::size(settings.chunk_size)?;

    let plan = PrintPlan::build(pages, chunk_size);
    debug!(pages = pages.get(), chunks = plan.chunks.len(), "generated page order");

    render::render(&plan, settings.format, &settings.separator)
}
