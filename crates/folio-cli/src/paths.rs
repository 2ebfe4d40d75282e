//! Filesystem locations
//!
//! Folio keeps no user data; the only path it owns is the log directory.

use std::path::PathBuf;

/// Directory for diagnostic log files
pub fn logs_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("folio")
        .join("logs")
}
