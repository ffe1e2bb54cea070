/// A named field of the event tree. Branches nest: a branch may carry no
/// payload of its own and exist only to group its sub-branches.
///
/// Built once by the store adapter and read-only afterwards; the size pass
/// never mutates it.
#[derive(Debug, Clone)]
pub struct Branch {
    pub name: String,
    /// Bytes the file format spends persisting this branch's own descriptor
    /// metadata (not its payload).
    pub descriptor_bytes: u64,
    /// Compressed payload bytes on disk. Zero means the branch stores no
    /// payload of its own, only descriptor metadata and children.
    pub compressed_bytes: u64,
    pub children: Vec<Branch>,
}

impl Branch {
    pub fn new(name: impl Into<String>, descriptor_bytes: u64, compressed_bytes: u64) -> Self {
        Self {
            name: name.into(),
            descriptor_bytes,
            compressed_bytes,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Branch>) -> Self {
        self.children = children;
        self
    }
}

/// The root tabular record: an ordered set of top-level branches.
#[derive(Debug, Clone)]
pub struct EventTree {
    /// Name of the root record, normally `Events`.
    pub name: String,
    pub branches: Vec<Branch>,
    pub num_events: u64,
}

impl EventTree {
    pub fn new(name: impl Into<String>, branches: Vec<Branch>) -> Self {
        Self {
            name: name.into(),
            branches,
            num_events: 0,
        }
    }
}
