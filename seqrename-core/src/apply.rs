use crate::error::{RenameError, Result};
use crate::plan::{Rename, RenamePlan};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Run every rename in `plan` inside `folder`, in plan order.
///
/// A `Renamed: '<old>' -> '<new>'` line is written to `out` after each rename
/// succeeds. The first failure stops the run; renames already done stay done
/// and are carried on the error (see [`RenameError::completed`]).
/// An existing destination is treated as a failure, never overwritten.
pub fn apply_plan(folder: &Path, plan: &RenamePlan, out: &mut dyn Write) -> Result<usize> {
    for (index, rename) in plan.renames.iter().enumerate() {
        if let Err(source) = rename_one(folder, rename) {
            return Err(RenameError::incomplete(&plan.renames[..index], source));
        }

        info!(
            ordinal = rename.ordinal,
            from = %rename.from.to_string_lossy(),
            to = %rename.to.to_string_lossy(),
            "renamed"
        );
        if let Err(source) = writeln!(
            out,
            "Renamed: '{}' -> '{}'",
            rename.from.to_string_lossy(),
            rename.to.to_string_lossy()
        ) {
            return Err(RenameError::incomplete(
                &plan.renames[..=index],
                RenameError::Output(source),
            ));
        }
    }

    Ok(plan.renames.len())
}

fn rename_one(folder: &Path, rename: &Rename) -> Result<()> {
    let old_path = folder.join(&rename.from);
    let new_path = folder.join(&rename.to);

    // The destination may have appeared since the plan was checked
    if fs::symlink_metadata(&new_path).is_ok() {
        warn!(
            from = %rename.from.to_string_lossy(),
            to = %rename.to.to_string_lossy(),
            "destination already exists"
        );
        return Err(RenameError::DestinationExists {
            from: rename.from.clone(),
            to: rename.to.clone(),
        });
    }

    fs::rename(&old_path, &new_path).map_err(|source| RenameError::Rename {
        from: rename.from.clone(),
        to: rename.to.clone(),
        source,
    })
}
