//! Dataset file loading
//!
//! The catalog core only ever sees a string of CSV text; this shim reads
//! that text from disk. An unreadable file is an absence signal, not an
//! error: the caller gets `None` and decides what an empty catalog means.

use std::fs;
use std::path::Path;
use tracing::error;

/// Read the raw CSV text from `path`, or `None` if it cannot be read
pub fn load(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(err) => {
            error!("unable to read {}: {}", path.display(), err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Camera8001,43.6,-79.3,A ST,B AVE,u,,,,").unwrap();

        let text = load(file.path()).unwrap();
        assert!(text.starts_with("Camera8001"));
    }

    #[test]
    fn test_load_missing_file_is_absent() {
        assert_eq!(load(Path::new("/no/such/file.csv")), None);
    }
}
