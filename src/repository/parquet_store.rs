//! Parquet-backed event tree access.
//!
//! Opens a data file, verifies the root record is the `Events` tree and
//! converts its schema into the [`Branch`] model. Descriptor overhead comes
//! from the format's own footer serialization: each schema element and
//! column-chunk descriptor is re-encoded with the same compact protocol the
//! footer uses, and the byte length attributed to its branch. Leaf payload is
//! the column chunks' compressed size summed across row groups; group nodes
//! own no payload of their own.

use std::fs::File;
use std::path::Path;

use parquet::file::metadata::RowGroupMetaData;
use parquet::file::reader::FileReader;
use parquet::file::serialized_reader::{ReadOptionsBuilder, SerializedFileReader};
use parquet::format::SchemaElement;
use parquet::schema::types::{self, Type};
use parquet::thrift::TSerializable;
use thrift::protocol::TCompactOutputProtocol;

use crate::error::{EventSizeError, Result};
use crate::model::{Branch, EventTree};

/// Name of the root record holding the event tree.
pub const EVENTS_RECORD: &str = "Events";

/// Per-open reader settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadSettings {
    /// Skip loading the optional page index along with the footer. Sizes are
    /// computed from the footer alone, so either setting reports the same
    /// numbers.
    pub no_index_load: bool,
}

/// Open `path` and convert its `Events` record into an [`EventTree`].
pub fn open_events(path: &Path, settings: ReadSettings) -> Result<EventTree> {
    let file = File::open(path).map_err(|source| EventSizeError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut options = ReadOptionsBuilder::new();
    if !settings.no_index_load {
        options = options.with_page_index();
    }
    let reader = SerializedFileReader::new_with_options(file, options.build()).map_err(
        |source| EventSizeError::ReadFile {
            path: path.to_path_buf(),
            source,
        },
    )?;

    let metadata = reader.metadata();
    let file_meta = metadata.file_metadata();
    let root = file_meta.schema_descr().root_schema();

    if root.name() != EVENTS_RECORD {
        return Err(EventSizeError::EventsNotFound {
            path: path.to_path_buf(),
            expected: EVENTS_RECORD,
            found: root.name().to_string(),
        });
    }
    if !root.is_group() {
        return Err(EventSizeError::NotATree {
            path: path.to_path_buf(),
            name: root.name().to_string(),
        });
    }

    // Failing to re-derive the footer descriptors from a schema that already
    // parsed is a structural inconsistency, not a read failure.
    let elements = types::to_thrift(root).map_err(|source| EventSizeError::Introspection {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;

    let mut walk = SchemaWalk {
        path,
        elements: &elements,
        row_groups: metadata.row_groups(),
        // Element 0 describes the root record itself; its cost belongs to
        // the file, not to any branch.
        element_idx: 1,
        leaf_idx: 0,
    };

    let mut branches = Vec::with_capacity(root.get_fields().len());
    for field in root.get_fields() {
        branches.push(walk.branch(field)?);
    }

    Ok(EventTree {
        name: root.name().to_string(),
        branches,
        num_events: file_meta.num_rows().max(0) as u64,
    })
}

/// Preorder walk pairing schema nodes with their footer descriptors.
///
/// Schema elements and leaf columns are both laid out in depth-first schema
/// order, so a single pass with two cursors lines the sequences up.
struct SchemaWalk<'a> {
    path: &'a Path,
    elements: &'a [SchemaElement],
    row_groups: &'a [RowGroupMetaData],
    element_idx: usize,
    leaf_idx: usize,
}

impl SchemaWalk<'_> {
    fn branch(&mut self, node: &Type) -> Result<Branch> {
        let element = &self.elements[self.element_idx];
        self.element_idx += 1;

        let mut descriptor_bytes = self.encoded_len(element)?;
        let mut compressed_bytes = 0u64;
        let mut children = Vec::new();

        if node.is_primitive() {
            for group in self.row_groups {
                let column = group.column(self.leaf_idx);
                descriptor_bytes += self.encoded_len(&column.to_thrift())?;
                compressed_bytes += column.compressed_size().max(0) as u64;
            }
            self.leaf_idx += 1;
        } else {
            children.reserve(node.get_fields().len());
            for field in node.get_fields() {
                children.push(self.branch(field)?);
            }
        }

        Ok(Branch {
            name: node.name().to_string(),
            descriptor_bytes,
            compressed_bytes,
            children,
        })
    }

    /// Compact-protocol encoded length of one footer descriptor.
    fn encoded_len<T: TSerializable>(&self, value: &T) -> Result<u64> {
        let mut buffer = Vec::new();
        let mut protocol = TCompactOutputProtocol::new(&mut buffer);
        value
            .write_to_out_protocol(&mut protocol)
            .map_err(|source| EventSizeError::Introspection {
                path: self.path.to_path_buf(),
                source: Box::new(source),
            })?;
        Ok(buffer.len() as u64)
    }
}
