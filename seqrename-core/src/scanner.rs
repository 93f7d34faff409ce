use crate::error::{RenameError, Result};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// What kind of directory entry a name refers to.
///
/// Taken from the entry itself, so a symlink is reported as `Symlink` even
/// when it points at a regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Other,
}

impl EntryKind {
    fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_file() {
            Self::File
        } else if file_type.is_dir() {
            Self::Dir
        } else {
            Self::Other
        }
    }
}

/// One entry directly inside the scanned folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl FolderEntry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// List the entries directly inside `folder`.
///
/// Does not recurse and does not follow symlinks. The folder must exist and
/// be a directory, otherwise nothing is listed.
pub fn scan_folder(folder: &Path) -> Result<Vec<FolderEntry>> {
    let metadata = match fs::metadata(folder) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(RenameError::FolderNotFound(folder.to_path_buf()));
        },
        Err(source) => {
            return Err(RenameError::Io {
                path: folder.to_path_buf(),
                source,
            });
        },
    };

    if !metadata.is_dir() {
        return Err(RenameError::NotADirectory(folder.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| RenameError::Scan {
            path: folder.to_path_buf(),
            source,
        })?;

        entries.push(FolderEntry {
            name: entry.file_name().to_os_string(),
            kind: EntryKind::from_file_type(entry.file_type()),
        });
    }

    debug!(
        folder = %folder.display(),
        entries = entries.len(),
        "scanned folder"
    );

    Ok(entries)
}
