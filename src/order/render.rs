use super::page_count::PageCount;
use crate::error::OrderError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

/// Everything needed to print one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintPlan {
    pub pages: PageCount,
    pub order: Vec<u32>,
    pub chunks: Vec<Vec<u32>>,
}

pub fn join(items: &[u32], sep: &str) -> String {
    items.iter().map(u32::to_string).collect::<Vec<_>>().join(sep)
}

/// One chunk per line; every line, including the last, ends in `\n`.
pub fn render_text(chunks: &[Vec<u32>], sep: &str) -> String {
    chunks
        .iter()
        .map(|chunk| format!("{}\n", join(chunk, sep)))
        .collect()
}

pub fn render_json(plan: &PrintPlan) -> Result<String, OrderError> {
    let mut out = serde_json::to_string_pretty(plan)?;
    out.push('\n');
    Ok(out)
}

pub fn render(plan: &PrintPlan, format: OutputFormat, sep: &str) -> Result<String, OrderError> {
    match format {
        OutputFormat::Text => Ok(render_text(&plan.chunks, sep)),
        OutputFormat::Json => render_json(plan),
    }
}
