#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod config;
pub mod error;
pub mod operations;
pub mod output;
pub mod plan;
pub mod scanner;

pub use apply::apply_plan;
pub use config::{Config, DefaultsConfig, DEFAULT_EXTENSION, DEFAULT_PREFIX};
pub use error::RenameError;
pub use operations::{rename_operation, rename_sequentially, RenameOptions};
pub use output::{OutputFormat, OutputFormatter, RenameFailure, RenameResult, RenamedFile};
pub use plan::{
    check_naming_scheme, destination_name, has_prefix, plan_renames, Rename, RenameConflict,
    RenamePlan,
};
pub use scanner::{scan_folder, EntryKind, FolderEntry};
