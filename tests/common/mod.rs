// Shared test fixtures: write small Parquet event files into a temp dir
#![allow(dead_code)]

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use parquet::basic::Compression;
use parquet::data_type::Int64Type;
use parquet::file::properties::WriterProperties;
use parquet::file::writer::SerializedFileWriter;
use parquet::schema::parser::parse_message_type;
use tempfile::TempDir;

/// Event-file schema used by most tests. All leaves are required int64 so no
/// definition or repetition levels are needed when writing.
pub const EVENTS_SCHEMA: &str = "
message Events {
    required int64 EventAuxiliary;
    required int64 recoTracks;
    required group recoMuons {
        required int64 pt;
        required int64 eta;
    }
}
";

/// Write a Parquet file with the given schema message, filling every int64
/// leaf with `rows` ascending values in one row group.
pub fn write_event_file(
    dir: &TempDir,
    file_name: &str,
    message_type: &str,
    rows: usize,
) -> Result<PathBuf> {
    let path = dir.path().join(file_name);
    let schema = Arc::new(parse_message_type(message_type)?);
    let props = Arc::new(
        WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build(),
    );

    let file = File::create(&path)?;
    let mut writer = SerializedFileWriter::new(file, schema, props)?;
    let mut row_group = writer.next_row_group()?;
    let values: Vec<i64> = (0..rows as i64).collect();
    while let Some(mut column) = row_group.next_column()? {
        column.typed::<Int64Type>().write_batch(&values, None, None)?;
        column.close()?;
    }
    row_group.close()?;
    writer.close()?;
    Ok(path)
}

/// Write a file that is not Parquet at all.
pub fn write_garbage_file(dir: &TempDir, file_name: &str) -> Result<PathBuf> {
    let path = dir.path().join(file_name);
    std::fs::write(&path, b"definitely not a columnar file")?;
    Ok(path)
}
