//! Error taxonomy with per-cause process exit codes, so scripts can tell
//! failure causes apart.

use std::io;
use std::path::PathBuf;

use parquet::errors::ParquetError;
use thiserror::Error;

/// Process exit codes.
///
/// On unix the process status carries only the low byte, so scripts observe
/// these modulo 256 (7000 → 88 through 7005 → 93). The codes stay distinct
/// either way.
pub mod exit_code {
    /// Success, or help/version shown.
    pub const SUCCESS: i32 = 0;
    /// Malformed command line.
    pub const USAGE: i32 = 7000;
    /// No data file argument.
    pub const NO_DATA_FILE: i32 = 7001;
    /// Data file missing, unreadable, or not a valid columnar file.
    pub const OPEN_FAILED: i32 = 7002;
    /// The expected `Events` root record is not in the file.
    pub const EVENTS_MISSING: i32 = 7003;
    /// Root record present but not a branch-bearing tree.
    pub const BAD_TREE: i32 = 7004;
    /// Plot or histogram output could not be written.
    pub const WRITE_FAILED: i32 = 7005;
}

#[derive(Debug, Error)]
pub enum EventSizeError {
    #[error("no data file given")]
    MissingDataFile,

    #[error("unable to open data file {}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to read data file {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: ParquetError,
    },

    #[error("no record \"{expected}\" found in file {} (root record is \"{found}\")", path.display())]
    EventsNotFound {
        path: PathBuf,
        expected: &'static str,
        found: String,
    },

    #[error("record \"{name}\" in file {} is not a tree", path.display())]
    NotATree { path: PathBuf, name: String },

    #[error("branch descriptor introspection failed for {}", path.display())]
    Introspection {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("unable to write {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EventSizeError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingDataFile => exit_code::NO_DATA_FILE,
            Self::OpenFile { .. } | Self::ReadFile { .. } => exit_code::OPEN_FAILED,
            Self::EventsNotFound { .. } => exit_code::EVENTS_MISSING,
            Self::NotATree { .. } | Self::Introspection { .. } => exit_code::BAD_TREE,
            Self::WriteOutput { .. } => exit_code::WRITE_FAILED,
        }
    }
}

pub type Result<T> = std::result::Result<T, EventSizeError>;
