//! File attachments selected for upload alongside a message.

use std::fmt;
use std::io::Read;

use camino::Utf8Path;
use cap_std::fs_utf8::Dir;
use thiserror::Error;

/// Errors raised while loading an attachment from disk.
#[derive(Debug, Error)]
pub enum AttachmentError {
    /// The path has no final component to use as a file name.
    #[error("attachment path '{0}' has no file name")]
    MissingFileName(String),

    /// The file could not be opened or read.
    #[error("failed to read attachment '{path}': {source}")]
    Read {
        /// Path that was being read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// A file selected for upload.
///
/// The file name is kept exactly as selected; it becomes the multipart file
/// name on dispatch.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    file_name: String,
    bytes: Vec<u8>,
}

impl Attachment {
    /// Creates an attachment from in-memory bytes.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads an attachment relative to a capability directory.
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentError::MissingFileName`] when `path` ends in `..`
    /// or is empty, and [`AttachmentError::Read`] when the file cannot be
    /// read.
    pub fn read_from(dir: &Dir, path: &Utf8Path) -> Result<Self, AttachmentError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| AttachmentError::MissingFileName(path.to_string()))?;
        let read_error = |source| AttachmentError::Read {
            path: path.to_string(),
            source,
        };
        let mut file = dir.open(path).map_err(read_error)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(read_error)?;
        Ok(Self::new(file_name, bytes))
    }

    /// Returns the original file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a zero-byte file.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cap_std::ambient_authority;
    use std::env;

    #[test]
    fn debug_output_omits_contents() {
        let attachment = Attachment::new("notes.txt", b"secret".to_vec());
        let rendered = format!("{attachment:?}");
        assert!(rendered.contains("notes.txt"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn read_from_keeps_file_name_and_bytes() {
        let root = env::temp_dir().join(format!("hookcraft-attachment-{}", std::process::id()));
        std::fs::create_dir_all(&root).expect("create temp dir");
        std::fs::write(root.join("report.csv"), b"a,b\n1,2\n").expect("write fixture");

        let dir = Dir::open_ambient_dir(
            Utf8Path::from_path(&root).expect("utf-8 temp path"),
            ambient_authority(),
        )
        .expect("open temp dir");
        let attachment =
            Attachment::read_from(&dir, Utf8Path::new("report.csv")).expect("read attachment");

        assert_eq!(attachment.file_name(), "report.csv");
        assert_eq!(attachment.bytes(), b"a,b\n1,2\n");
        std::fs::remove_dir_all(&root).expect("remove temp dir");
    }

    #[test]
    fn read_from_reports_missing_file() {
        let dir = Dir::open_ambient_dir(
            Utf8Path::from_path(&env::temp_dir()).expect("utf-8 temp path"),
            ambient_authority(),
        )
        .expect("open temp dir");
        let result = Attachment::read_from(&dir, Utf8Path::new("hookcraft-does-not-exist.bin"));
        assert!(matches!(result, Err(AttachmentError::Read { .. })));
    }
}
