use crate::error::RenameError;
use crate::plan::{Rename, RenamePlan};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::Path;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Summary,
    Json,
}

/// One completed rename, as reported to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamedFile {
    pub from: String,
    pub to: String,
    pub ordinal: usize,
}

impl From<&Rename> for RenamedFile {
    fn from(rename: &Rename) -> Self {
        Self {
            from: rename.from.to_string_lossy().into_owned(),
            to: rename.to.to_string_lossy().into_owned(),
            ordinal: rename.ordinal,
        }
    }
}

/// Result of a sequential rename operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameResult {
    pub folder: String,
    pub prefix: String,
    pub extension: String,
    pub renamed: usize,
    pub renames: Vec<RenamedFile>,
}

impl RenameResult {
    /// Build the result for the first `renamed` entries of `plan`.
    pub fn from_plan(folder: &Path, plan: &RenamePlan, renamed: usize) -> Self {
        let done = &plan.renames[..renamed.min(plan.renames.len())];
        Self::from_renames(folder, &plan.prefix, &plan.extension, done)
    }

    pub fn from_renames(folder: &Path, prefix: &str, extension: &str, renames: &[Rename]) -> Self {
        Self {
            folder: folder.display().to_string(),
            prefix: prefix.to_string(),
            extension: extension.to_string(),
            renamed: renames.len(),
            renames: renames.iter().map(RenamedFile::from).collect(),
        }
    }
}

/// A rename run that stopped on an error, with whatever it got through first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameFailure {
    pub result: RenameResult,
    pub error: String,
}

impl RenameFailure {
    pub fn new(folder: &Path, prefix: &str, extension: &str, error: &RenameError) -> Self {
        Self {
            result: RenameResult::from_renames(folder, prefix, extension, error.completed()),
            error: error.to_string(),
        }
    }
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RenameResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "rename",
            "folder": self.folder,
            "prefix": self.prefix,
            "extension": self.extension,
            "summary": {
                "renamed": self.renamed,
            },
            "renames": self.renames,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        match self.renamed {
            0 => format!("No files to rename in '{}'\n", self.folder),
            1 => format!("Renamed 1 file in '{}'\n", self.folder),
            n => format!("Renamed {} files in '{}'\n", n, self.folder),
        }
    }
}

impl OutputFormatter for RenameFailure {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": false,
            "operation": "rename",
            "error": self.error,
            "folder": self.result.folder,
            "prefix": self.result.prefix,
            "extension": self.result.extension,
            "summary": {
                "renamed": self.result.renamed,
            },
            "renames": self.result.renames,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        match self.result.renamed {
            1 => "Renamed 1 file before failing\n".to_string(),
            n => format!("Renamed {} files before failing\n", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn sample() -> RenameResult {
        RenameResult {
            folder: "photos".to_string(),
            prefix: "asset_".to_string(),
            extension: ".md".to_string(),
            renamed: 2,
            renames: vec![
                RenamedFile {
                    from: "document.doc".to_string(),
                    to: "asset_1.md".to_string(),
                    ordinal: 1,
                },
                RenamedFile {
                    from: "image.jpg".to_string(),
                    to: "asset_2.md".to_string(),
                    ordinal: 2,
                },
            ],
        }
    }

    #[test]
    fn test_rename_result_json_format() {
        let json = sample().format_json();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["operation"], "rename");
        assert_eq!(parsed["folder"], "photos");
        assert_eq!(parsed["prefix"], "asset_");
        assert_eq!(parsed["extension"], ".md");
        assert_eq!(parsed["summary"]["renamed"], 2);
        assert_eq!(parsed["renames"][0]["from"], "document.doc");
        assert_eq!(parsed["renames"][0]["to"], "asset_1.md");
        assert_eq!(parsed["renames"][1]["ordinal"], 2);
    }

    #[test]
    fn test_rename_result_summary_format() {
        assert_eq!(sample().format_summary(), "Renamed 2 files in 'photos'\n");

        let mut single = sample();
        single.renamed = 1;
        single.renames.truncate(1);
        assert_eq!(single.format_summary(), "Renamed 1 file in 'photos'\n");

        let mut empty = sample();
        empty.renamed = 0;
        empty.renames.clear();
        assert_eq!(empty.format_summary(), "No files to rename in 'photos'\n");
    }

    #[test]
    fn test_output_format_trait() {
        let result = sample();
        assert_eq!(result.format(OutputFormat::Json), result.format_json());
        assert_eq!(result.format(OutputFormat::Summary), result.format_summary());
    }

    fn failed_after_one() -> RenameFailure {
        let completed = vec![Rename {
            from: OsString::from("a"),
            to: OsString::from("n_1"),
            ordinal: 1,
        }];
        let err = RenameError::incomplete(
            &completed,
            RenameError::DestinationExists {
                from: OsString::from("b"),
                to: OsString::from("n_2"),
            },
        );
        RenameFailure::new(Path::new("work"), "n_", "", &err)
    }

    #[test]
    fn test_rename_failure_json_lists_completed_renames() {
        let parsed: serde_json::Value =
            serde_json::from_str(&failed_after_one().format_json()).unwrap();

        assert_eq!(parsed["success"], false);
        assert_eq!(parsed["operation"], "rename");
        assert_eq!(parsed["folder"], "work");
        assert_eq!(parsed["summary"]["renamed"], 1);
        assert_eq!(parsed["renames"][0]["from"], "a");
        assert_eq!(parsed["renames"][0]["to"], "n_1");
        assert!(parsed["error"]
            .as_str()
            .unwrap()
            .contains("Destination already exists"));
    }

    #[test]
    fn test_rename_failure_summary() {
        assert_eq!(
            failed_after_one().format_summary(),
            "Renamed 1 file before failing\n"
        );

        let mut two = failed_after_one();
        two.result.renamed = 2;
        assert_eq!(two.format_summary(), "Renamed 2 files before failing\n");
    }

    #[test]
    fn test_from_plan_takes_completed_prefix() {
        let plan = crate::plan::plan_renames(
            &[
                crate::scanner::FolderEntry::new("b", crate::scanner::EntryKind::File),
                crate::scanner::FolderEntry::new("a", crate::scanner::EntryKind::File),
            ],
            "n_",
            "",
        );
        let result = RenameResult::from_plan(Path::new("."), &plan, 1);

        assert_eq!(result.renamed, 1);
        assert_eq!(result.renames[0].from, "a");
        assert_eq!(result.renames[0].to, "n_1");
    }
}
