//! Atomic write primitives
//!
//! Uses temp→rename so readers never observe a partial record

use crate::errors::{io_error, Result};
use std::fs;
use std::path::Path;

/// Atomically write bytes to a file
///
/// The temp file sits next to the target so the rename stays on one filesystem.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_record_dir", e))?;
        }
    }

    let temp_path = target_path.with_extension("tmp");

    fs::write(&temp_path, content).map_err(|e| io_error("write_record_temp", e))?;
    fs::rename(&temp_path, target_path).map_err(|e| io_error("rename_record_temp", e))?;

    Ok(())
}
