use crate::plan::Rename;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("Folder not found at path: {}", .0.display())]
    FolderNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error(
        "Destination already exists: cannot rename '{}' to '{}'",
        .from.to_string_lossy(),
        .to.to_string_lossy()
    )]
    DestinationExists { from: OsString, to: OsString },

    #[error("Failed to list {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error(
        "Failed to rename '{}' to '{}': {source}",
        .from.to_string_lossy(),
        .to.to_string_lossy()
    )]
    Rename {
        from: OsString,
        to: OsString,
        #[source]
        source: io::Error,
    },

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "Invalid destination name '{0}': prefix and extension must not contain path separators"
    )]
    InvalidName(String),

    #[error("Failed to write progress: {0}")]
    Output(#[from] io::Error),

    /// A failure after some renames already went through; those stay in place.
    #[error("{source}")]
    Incomplete {
        completed: Vec<Rename>,
        #[source]
        source: Box<RenameError>,
    },
}

impl RenameError {
    /// Attach the renames that completed before `source` stopped the run.
    pub fn incomplete(completed: &[Rename], source: Self) -> Self {
        if completed.is_empty() {
            source
        } else {
            Self::Incomplete {
                completed: completed.to_vec(),
                source: Box::new(source),
            }
        }
    }

    /// The error that stopped the run, without the completed-renames wrapper.
    pub fn underlying(&self) -> &Self {
        match self {
            Self::Incomplete { source, .. } => source.underlying(),
            other => other,
        }
    }

    /// Renames that went through before the failure.
    pub fn completed(&self) -> &[Rename] {
        match self {
            Self::Incomplete { completed, .. } => completed,
            _ => &[],
        }
    }

    /// True for the "folder is missing" class; everything else is unexpected.
    pub fn is_not_found(&self) -> bool {
        matches!(self.underlying(), Self::FolderNotFound(_))
    }

    /// True when the arguments themselves are unusable, before anything is touched.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self.underlying(),
            Self::FolderNotFound(_) | Self::NotADirectory(_) | Self::InvalidName(_)
        )
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self.underlying(), Self::DestinationExists { .. })
    }
}

pub type Result<T, E = RenameError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = RenameError::FolderNotFound(PathBuf::from("missing"));
        assert_eq!(err.to_string(), "Folder not found at path: missing");
        assert!(err.is_not_found());
        assert!(err.is_invalid_input());
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_conflict_message() {
        let err = RenameError::DestinationExists {
            from: OsString::from("a.txt"),
            to: OsString::from("file_1.txt"),
        };
        assert_eq!(
            err.to_string(),
            "Destination already exists: cannot rename 'a.txt' to 'file_1.txt'"
        );
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_a_directory_is_invalid_but_not_missing() {
        let err = RenameError::NotADirectory(PathBuf::from("plain.txt"));
        assert!(err.is_invalid_input());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_name_is_invalid_input() {
        let err = RenameError::InvalidName("../out_1.txt".to_string());
        assert!(err.is_invalid_input());
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("'../out_1.txt'"));
    }

    #[test]
    fn test_incomplete_keeps_completed_and_classification() {
        let done = vec![Rename {
            from: OsString::from("a"),
            to: OsString::from("n_1"),
            ordinal: 1,
        }];
        let err = RenameError::incomplete(
            &done,
            RenameError::DestinationExists {
                from: OsString::from("b"),
                to: OsString::from("n_2"),
            },
        );

        assert_eq!(err.completed(), done.as_slice());
        assert!(err.is_conflict());
        assert_eq!(
            err.to_string(),
            "Destination already exists: cannot rename 'b' to 'n_2'"
        );
    }

    #[test]
    fn test_incomplete_without_progress_is_the_bare_error() {
        let err = RenameError::incomplete(&[], RenameError::FolderNotFound(PathBuf::from("x")));
        assert!(matches!(err, RenameError::FolderNotFound(_)));
        assert!(err.completed().is_empty());
    }
}
