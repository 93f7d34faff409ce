use crate::apply::apply_plan;
use crate::config::{DEFAULT_EXTENSION, DEFAULT_PREFIX};
use crate::error::{RenameError, Result};
use crate::output::RenameResult;
use crate::plan::{check_naming_scheme, plan_renames};
use crate::scanner::scan_folder;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Naming scheme for a sequential rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    pub prefix: String,
    pub extension: String,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Rename operation - returns structured data
pub fn rename_operation(
    folder: &Path,
    options: &RenameOptions,
    out: &mut dyn Write,
) -> Result<RenameResult> {
    rename_sequentially(folder, &options.prefix, &options.extension, out)
}

/// Rename every eligible file in `folder` to `<prefix><n><extension>`.
///
/// Progress goes to `out`: a header with the number of files found, one
/// `Renamed:` line per file and a completion line. A missing folder or a
/// destination that already exists aborts before anything is renamed, as does
/// a prefix or extension that would move files out of `folder`.
pub fn rename_sequentially(
    folder: &Path,
    prefix: &str,
    extension: &str,
    out: &mut dyn Write,
) -> Result<RenameResult> {
    check_naming_scheme(prefix, extension)?;

    let entries = scan_folder(folder)?;
    let plan = plan_renames(&entries, prefix, extension);

    writeln!(
        out,
        "--- Found {} files to rename in '{}' ---",
        plan.len(),
        folder.display()
    )?;

    let conflicts = plan.find_conflicts(folder);
    if let Some(first) = conflicts.first() {
        warn!(
            conflicts = conflicts.len(),
            folder = %folder.display(),
            "planned destinations already exist, nothing renamed"
        );
        return Err(RenameError::DestinationExists {
            from: first.from.clone(),
            to: first.to.clone(),
        });
    }

    let renamed = apply_plan(folder, &plan, out)?;

    writeln!(out, "--- Renaming complete ---")
        .map_err(|e| RenameError::incomplete(&plan.renames, RenameError::Output(e)))?;

    Ok(RenameResult::from_plan(folder, &plan, renamed))
}
