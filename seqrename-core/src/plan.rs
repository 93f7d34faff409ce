use crate::error::{RenameError, Result};
use crate::scanner::FolderEntry;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{self, Component, Path};
use tracing::debug;

/// A single planned rename inside the target folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: OsString,
    pub to: OsString,
    /// 1-based position of `from` among the sorted eligible names
    pub ordinal: usize,
}

/// The full set of renames for one invocation, in the order they will run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub prefix: String,
    pub extension: String,
    pub renames: Vec<Rename>,
}

/// A planned destination that is already taken by something in the folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameConflict {
    pub from: OsString,
    pub to: OsString,
}

/// Build `prefix + ordinal + extension`.
pub fn destination_name(prefix: &str, ordinal: usize, extension: &str) -> String {
    format!("{prefix}{ordinal}{extension}")
}

/// Reject a prefix/extension pair whose names would leave the folder.
///
/// A generated name must be exactly one plain path component: no separators,
/// no `..`, no drive or root prefix. Only the digits vary between ordinals, so
/// checking one name covers the whole run.
pub fn check_naming_scheme(prefix: &str, extension: &str) -> Result<()> {
    let name = destination_name(prefix, 1, extension);
    let mut components = Path::new(&name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if single_normal && !name.contains(path::is_separator) {
        Ok(())
    } else {
        Err(RenameError::InvalidName(name))
    }
}

/// Whether `name` already carries `prefix` and must be left alone.
pub fn has_prefix(name: &OsStr, prefix: &str) -> bool {
    name.as_encoded_bytes().starts_with(prefix.as_bytes())
}

/// Decide which files get renamed and what they become.
///
/// Only regular files whose name does not start with `prefix` are eligible.
/// They are sorted by plain byte order (so `file10` sorts before `file2`) and
/// numbered from 1 in that order.
pub fn plan_renames(entries: &[FolderEntry], prefix: &str, extension: &str) -> RenamePlan {
    let mut eligible: Vec<&OsStr> = entries
        .iter()
        .filter(|entry| entry.is_file())
        .map(|entry| entry.name.as_os_str())
        .filter(|name| !has_prefix(name, prefix))
        .collect();

    eligible.sort_by(|a, b| a.as_encoded_bytes().cmp(b.as_encoded_bytes()));

    let renames: Vec<Rename> = eligible
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let ordinal = index + 1;
            Rename {
                from: name.to_os_string(),
                to: OsString::from(destination_name(prefix, ordinal, extension)),
                ordinal,
            }
        })
        .collect();

    debug!(
        prefix,
        extension,
        entries = entries.len(),
        eligible = renames.len(),
        "planned renames"
    );

    RenamePlan {
        prefix: prefix.to_string(),
        extension: extension.to_string(),
        renames,
    }
}

impl RenamePlan {
    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    /// Planned destinations that already exist in `folder`.
    ///
    /// Every destination starts with the prefix and no source does, so a hit
    /// here is always an unrelated entry that a rename would clobber.
    pub fn find_conflicts(&self, folder: &Path) -> Vec<RenameConflict> {
        self.renames
            .iter()
            .filter(|rename| fs::symlink_metadata(folder.join(&rename.to)).is_ok())
            .map(|rename| RenameConflict {
                from: rename.from.clone(),
                to: rename.to.clone(),
            })
            .collect()
    }
}
