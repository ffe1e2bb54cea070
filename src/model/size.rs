//! Branch size accounting.
//!
//! The total footprint of a branch is its own descriptor overhead, plus its
//! compressed payload when one is stored, plus every sub-branch below it.
//! Pure functions over the [`Branch`] tree at the moment of the call.

use serde::Serialize;

use super::{Branch, EventTree};

/// Bookkeeping branch excluded from the ranked report. It still counts
/// toward the full tree size.
pub const EVENT_AUX_BRANCH: &str = "EventAuxiliary";

/// Total storage footprint of one branch, sub-branches included.
///
/// A leaf with no payload costs exactly its descriptor overhead.
pub fn branch_size(branch: &Branch) -> u64 {
    branch.descriptor_bytes + branch.compressed_bytes + branches_size(&branch.children)
}

/// Sum of [`branch_size`] over an ordered branch list.
///
/// An empty list contributes nothing; absence of children is the recursion
/// base case, not an error.
pub fn branches_size(branches: &[Branch]) -> u64 {
    branches.iter().map(branch_size).sum()
}

/// Footprint of the whole tree, the excluded bookkeeping branch included.
pub fn tree_size(tree: &EventTree) -> u64 {
    branches_size(&tree.branches)
}

/// One ranked entry of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeReport {
    pub name: String,
    pub bytes: u64,
}

/// Ranked per-branch sizes plus the two totals the report prints.
#[derive(Debug, Clone)]
pub struct BranchRanking {
    /// Largest branch first; the bookkeeping branch is not listed.
    pub entries: Vec<SizeReport>,
    /// Sum over the listed entries only.
    pub reported_bytes: u64,
    /// Full tree footprint, bookkeeping branch included. Differs from
    /// `reported_bytes` exactly by the excluded branch's size.
    pub total_bytes: u64,
}

/// Rank every top-level branch except [`EVENT_AUX_BRANCH`] by total size,
/// descending. The sort is stable, so equal sizes keep encounter order.
pub fn rank_branches(tree: &EventTree) -> BranchRanking {
    let mut entries: Vec<SizeReport> = tree
        .branches
        .iter()
        .filter(|b| b.name != EVENT_AUX_BRANCH)
        .map(|b| SizeReport {
            name: b.name.clone(),
            bytes: branch_size(b),
        })
        .collect();
    entries.sort_by(|a, b| b.bytes.cmp(&a.bytes));

    let reported_bytes = entries.iter().map(|e| e.bytes).sum();
    BranchRanking {
        entries,
        reported_bytes,
        total_bytes: tree_size(tree),
    }
}
