use std::{fs, path::Path};

use crate::{errors::ScanError, session::Session};

/// Writes a session snapshot to disk atomically by staging to a temporary file.
pub fn save_session_to_file(session: &Session, path: &Path) -> Result<(), ScanError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(session)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a previously exported session snapshot from disk.
pub fn load_session_from_file(path: &Path) -> Result<Session, ScanError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
