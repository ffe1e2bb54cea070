//! Histogram rendering and persistence.
//!
//! Purely decorative: consumes the ranked `(name, bytes)` entries and the
//! totals, nothing feeds back into the size pass. All styling lives in an
//! explicit [`RenderOptions`] value passed per call; no process-wide style
//! state.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::{EventSizeError, Result};
use crate::model::{BranchRanking, SizeReport};
use crate::util::human_bytes;

/// Styling for one rendering call.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Keep only the N largest branches.
    pub top: usize,
    pub width: u32,
    pub bar_height: u32,
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            top: 20,
            width: 960,
            bar_height: 18,
            title: "branch size".to_string(),
        }
    }
}

const MARGIN: u32 = 10;
const LABEL_WIDTH: u32 = 280;
const TITLE_HEIGHT: u32 = 24;
const BAR_GAP: u32 = 4;

/// Render the largest branches as a horizontal bar chart.
pub fn render_svg(ranking: &BranchRanking, options: &RenderOptions) -> String {
    let entries = top_entries(ranking, options.top);
    // Entries are sorted descending, so the first one sets the scale.
    let scale_max = entries.first().map(|e| e.bytes).unwrap_or(0).max(1);

    let row = options.bar_height + BAR_GAP;
    let height = TITLE_HEIGHT + entries.len() as u32 * row + 2 * MARGIN;
    let bar_span = options.width.saturating_sub(LABEL_WIDTH + 3 * MARGIN).max(1);

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
         font-family=\"monospace\" font-size=\"12\">\n",
        options.width, height
    );
    let _ = write!(
        svg,
        "  <text x=\"{}\" y=\"{}\" font-size=\"16\">{}</text>\n",
        MARGIN,
        MARGIN + 14,
        escape_text(&options.title)
    );

    for (i, entry) in entries.iter().enumerate() {
        let y = TITLE_HEIGHT + MARGIN + i as u32 * row;
        let bar = ((entry.bytes as f64 / scale_max as f64) * bar_span as f64).ceil() as u32;
        let _ = write!(
            svg,
            "  <text x=\"{}\" y=\"{}\">{}</text>\n",
            MARGIN,
            y + options.bar_height - 4,
            escape_text(&entry.name)
        );
        let _ = write!(
            svg,
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#4878a8\"/>\n",
            LABEL_WIDTH + MARGIN,
            y,
            bar.max(1),
            options.bar_height
        );
        let _ = write!(
            svg,
            "  <text x=\"{}\" y=\"{}\">{}</text>\n",
            LABEL_WIDTH + 2 * MARGIN + bar.max(1),
            y + options.bar_height - 4,
            human_bytes(entry.bytes)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Render and write the SVG plot.
pub fn save_svg(path: &Path, ranking: &BranchRanking, options: &RenderOptions) -> Result<()> {
    fs::write(path, render_svg(ranking, options)).map_err(|source| EventSizeError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Serialize)]
struct HistogramFile<'a> {
    tree: &'a str,
    total_bytes: u64,
    reported_bytes: u64,
    entries: &'a [SizeReport],
}

/// Persist the histogram data (top entries plus totals) as JSON.
pub fn save_histogram_json(
    path: &Path,
    tree_name: &str,
    ranking: &BranchRanking,
    top: usize,
) -> Result<()> {
    let payload = HistogramFile {
        tree: tree_name,
        total_bytes: ranking.total_bytes,
        reported_bytes: ranking.reported_bytes,
        entries: top_entries(ranking, top),
    };
    let write_err = |source: io::Error| EventSizeError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let mut text = serde_json::to_string_pretty(&payload)
        .map_err(io::Error::from)
        .map_err(write_err)?;
    text.push('\n');
    fs::write(path, text).map_err(write_err)
}

fn top_entries(ranking: &BranchRanking, top: usize) -> &[SizeReport] {
    &ranking.entries[..ranking.entries.len().min(top)]
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Branch, EventTree, rank_branches};

    fn ranking() -> BranchRanking {
        rank_branches(&EventTree::new(
            "Events",
            vec![
                Branch::new("recoTracks", 10, 990),
                Branch::new("recoMuons", 10, 490),
                Branch::new("triggerBits", 10, 90),
            ],
        ))
    }

    #[test]
    fn one_bar_per_entry() {
        let svg = render_svg(&ranking(), &RenderOptions::default());
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains("recoTracks"));
        assert!(svg.contains("triggerBits"));
    }

    #[test]
    fn top_limit_truncates_the_chart() {
        let options = RenderOptions {
            top: 2,
            ..RenderOptions::default()
        };
        let svg = render_svg(&ranking(), &options);
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(!svg.contains("triggerBits"));
    }

    #[test]
    fn empty_ranking_renders_an_empty_chart() {
        let empty = rank_branches(&EventTree::new("Events", Vec::new()));
        let svg = render_svg(&empty, &RenderOptions::default());
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<rect").count(), 0);
    }

    #[test]
    fn branch_names_are_xml_escaped() {
        let odd = rank_branches(&EventTree::new(
            "Events",
            vec![Branch::new("edmTriggerResults_TriggerResults__HLT<v1>", 1, 9)],
        ));
        let svg = render_svg(&odd, &RenderOptions::default());
        assert!(svg.contains("HLT&lt;v1&gt;"));
        assert!(!svg.contains("HLT<v1>"));
    }

    #[test]
    fn json_persist_keeps_totals_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist.json");
        save_histogram_json(&path, "Events", &ranking(), 2).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["tree"], "Events");
        assert_eq!(value["reported_bytes"], 1600);
        assert_eq!(value["total_bytes"], 1600);
        let entries = value["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["name"], "recoTracks");
        assert_eq!(entries[0]["bytes"], 1000);
    }
}
