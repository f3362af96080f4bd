//! Report rendering
//!
//! Each method's ranks are listed separately, sorted by page, with values
//! rounded to four decimal places.

use crate::algo::RankReport;
use crate::error::LinkRankResult;
use comfy_table::{ContentArrangement, Table};
use linkrank_algorithms::Distribution;
use serde::Serialize;
use std::fmt::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One block per method
    #[default]
    Text,
    /// Single table, one column per method
    Table,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    samples: usize,
    sweeps: usize,
    sampling: &'a Distribution,
    iteration: &'a Distribution,
}

/// Render `report` in the requested format.
pub fn render(report: &RankReport, format: OutputFormat) -> LinkRankResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => render_json(report),
    }
}

fn render_text(report: &RankReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "PageRank Results from Sampling (n = {})", report.samples);
    write_ranks(&mut out, &report.sampling);
    let _ = writeln!(out, "PageRank Results from Iteration");
    write_ranks(&mut out, &report.iteration);
    out
}

fn write_ranks(out: &mut String, ranks: &Distribution) {
    for (page, value) in ranks.iter() {
        let _ = writeln!(out, "  {}: {:.4}", page, value);
    }
}

fn render_table(report: &RankReport) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Page".to_string(),
        format!("Sampling (n = {})", report.samples),
        "Iteration".to_string(),
    ]);

    for (page, sampled) in report.sampling.iter() {
        let iterated = report
            .iteration
            .get(page)
            .map(|v| format!("{:.4}", v))
            .unwrap_or_default();
        table.add_row(vec![page.to_string(), format!("{:.4}", sampled), iterated]);
    }

    format!("{}\n", table)
}

fn render_json(report: &RankReport) -> LinkRankResult<String> {
    let json = JsonReport {
        samples: report.samples,
        sweeps: report.sweeps,
        sampling: &report.sampling,
        iteration: &report.iteration,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
