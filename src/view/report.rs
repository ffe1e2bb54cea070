//! Plain-text size listing.

use std::io::{self, Write};
use std::path::Path;

use crate::model::{BranchRanking, EVENT_AUX_BRANCH};
use crate::util::human_bytes;

/// Write the ranked listing and both totals.
///
/// The reported total covers only the listed branches; the full tree size
/// also includes the excluded bookkeeping branch.
pub fn write_listing<W: Write>(
    out: &mut W,
    path: &Path,
    num_events: u64,
    ranking: &BranchRanking,
) -> io::Result<()> {
    writeln!(
        out,
        "{} has {} events and {} reported branches",
        path.display(),
        num_events,
        ranking.entries.len()
    )?;

    for entry in &ranking.entries {
        writeln!(
            out,
            "{:>14} bytes  ({:>9})  {}",
            entry.bytes,
            human_bytes(entry.bytes),
            entry.name
        )?;
    }

    writeln!(
        out,
        "reported branch total: {} bytes (excluding {})",
        ranking.reported_bytes, EVENT_AUX_BRANCH
    )?;
    writeln!(out, "full tree size: {} bytes", ranking.total_bytes)?;
    Ok(())
}
