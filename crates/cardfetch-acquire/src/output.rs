use crate::download::DownloadError;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Ensure `base/name` exists and return its absolute path.
///
/// Missing parents are created too. Calling this on an existing directory
/// is a no-op that returns the same path.
pub fn prepare_output_dir(base: &Path, name: &str) -> io::Result<PathBuf> {
    let dir = base.join(name);
    fs::create_dir_all(&dir)?;
    let resolved = fs::canonicalize(&dir)?;
    tracing::debug!(path = %resolved.display(), "Output directory ready");
    Ok(resolved)
}

/// Write image bytes to `dir/filename`, replacing any existing file.
///
/// If writing fails after the file was opened, the partial file is removed
/// so a truncated image never sits on disk under a valid name.
pub fn write_image(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, DownloadError> {
    let path = dir.join(filename);

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(source) => return Err(DownloadError::Write { path, source }),
    };

    if let Err(source) = write_or_remove(file, &path, bytes) {
        return Err(DownloadError::Write { path, source });
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote image");
    Ok(path)
}

/// Write and flush `bytes` into the already-opened `writer` for `path`.
/// On failure the writer is closed and `path` removed.
fn write_or_remove<W: Write>(mut writer: W, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let result = writer.write_all(bytes).and_then(|()| writer.flush());
    drop(writer);

    if result.is_err() {
        if let Err(e) = fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "Could not remove partial file");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let first = prepare_output_dir(tmp.path(), "pokemon_cards").unwrap();
        let second = prepare_output_dir(tmp.path(), "pokemon_cards").unwrap();

        assert_eq!(first, second);
        assert!(first.is_absolute());
        assert!(first.is_dir());
    }

    #[test]
    fn test_prepare_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join("a").join("b");
        let dir = prepare_output_dir(&base, "cards").unwrap();
        assert!(dir.is_dir());
        assert!(dir.ends_with("a/b/cards"));
    }

    #[test]
    fn test_prepare_fails_on_file_collision() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("pokemon_cards"), b"not a directory").unwrap();
        assert!(prepare_output_dir(tmp.path(), "pokemon_cards").is_err());
    }

    #[test]
    fn test_write_truncates_existing() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("Eevee_002.jpg"), b"a much longer previous image").unwrap();

        let path = write_image(tmp.path(), "Eevee_002.jpg", b"new").unwrap();
        assert_eq!(fs::read(path).unwrap(), b"new");
    }

    /// Accepts a few bytes, then fails like a full disk.
    struct FailingWriter {
        inner: File,
        budget: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::other("no space left on device"));
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            self.inner.write(&buf[..n])
        }

        fn flush(&mut self) -> io::Result<()> {
            self.inner.flush()
        }
    }

    #[test]
    fn test_partial_file_removed_after_write_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Eevee_002.jpg");
        let writer = FailingWriter {
            inner: File::create(&path).unwrap(),
            budget: 4,
        };
        let err = write_or_remove(writer, &path, b"eevee-bytes").unwrap_err();

        assert_eq!(err.to_string(), "no space left on device");
        assert!(!path.exists());
    }

    #[test]
    fn test_successful_write_keeps_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Eevee_002.jpg");
        let file = File::create(&path).unwrap();

        write_or_remove(file, &path, b"eevee-bytes").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"eevee-bytes");
    }

    #[test]
    fn test_write_reports_unopenable_path() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("Eevee_002.jpg")).unwrap();

        let err = write_image(tmp.path(), "Eevee_002.jpg", b"img").unwrap_err();
        assert!(matches!(err, DownloadError::Write { .. }));
        // The colliding directory is left alone
        assert!(tmp.path().join("Eevee_002.jpg").is_dir());
    }
}
