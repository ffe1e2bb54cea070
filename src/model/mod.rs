mod branch;
mod size;

pub use branch::{Branch, EventTree};
pub use size::{
    BranchRanking, EVENT_AUX_BRANCH, SizeReport, branch_size, branches_size, rank_branches,
    tree_size,
};
