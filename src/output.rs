//! Output formatting for listed files

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::fs_utils::format_size;

/// One listed file, ready for plain or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_human: Option<String>,
}

impl FileRecord {
    /// Build a record, reading the file size only when requested.
    pub fn new(path: PathBuf, with_size: bool) -> Self {
        let size_bytes = if with_size {
            path.metadata().map(|m| m.len()).ok()
        } else {
            None
        };
        let size_human = size_bytes.map(format_size);
        Self {
            path,
            size_bytes,
            size_human,
        }
    }
}

/// Print records as pretty-printed JSON to stdout.
pub fn print_json(records: &[FileRecord]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(records).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

/// Write one record as a plain line: the path, preceded by the
/// human-readable size when present.
pub fn write_record(out: &mut impl Write, record: &FileRecord) -> io::Result<()> {
    match &record.size_human {
        Some(size) => writeln!(out, "{}\t{}", size, record.path.display()),
        None => writeln!(out, "{}", record.path.display()),
    }
}
