use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ConvertError;

/// Read a text file and return its lines without line terminators.
pub fn read_all_lines(path: impl AsRef<Path>) -> Result<Vec<String>, ConvertError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    Ok(content.lines().map(String::from).collect())
}

/// Write `content` to `path`, replacing any existing file.
///
/// The content goes to a uniquely named temporary file in the same directory
/// and is then persisted over `path`, so `path` is either untouched or fully
/// written and no other file in that directory is touched.
pub fn write_all(path: impl AsRef<Path>, content: &str) -> Result<(), ConvertError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ConvertError::io(path, e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| ConvertError::io(path, e))?;
    tmp.persist(path)
        .map_err(|e| ConvertError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_all_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proxies.txt");
        fs::write(&path, "\u{feff}1.2.3.4:8080\r\n5.6.7.8:3128\n").unwrap();

        let lines = read_all_lines(&path).unwrap();
        assert_eq!(lines, vec!["1.2.3.4:8080", "5.6.7.8:3128"]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        match read_all_lines(&path) {
            Err(ConvertError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_write_all_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "old").unwrap();

        write_all(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_all_leaves_sibling_tmp_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let sibling = dir.path().join("out.json.tmp");
        fs::write(&sibling, "keep me").unwrap();

        write_all(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert_eq!(fs::read_to_string(&sibling).unwrap(), "keep me");
    }

    #[test]
    fn test_write_all_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.json");
        assert!(matches!(
            write_all(&path, "{}"),
            Err(ConvertError::Io { .. })
        ));
        assert!(!path.exists());
    }
}
