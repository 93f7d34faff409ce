use anyhow::Result;
use seqrename_core::{
    rename_operation, OutputFormat, OutputFormatter, RenameError, RenameFailure, RenameOptions,
};
use std::io::{self, Write};
use std::path::Path;

pub fn handle_rename(
    folder: &Path,
    options: &RenameOptions,
    output: OutputFormat,
    quiet: bool,
    stdout: &mut dyn Write,
) -> Result<()> {
    match output {
        OutputFormat::Json => match rename_operation(folder, options, &mut io::sink()) {
            Ok(result) => writeln!(stdout, "{}", result.format_json())?,
            Err(err) => {
                report_failure(stdout, folder, options, &err, OutputFormat::Json);
                return Err(err.into());
            },
        },
        OutputFormat::Summary if quiet => {
            match rename_operation(folder, options, &mut io::sink()) {
                Ok(result) => write!(stdout, "{}", result.format_summary())?,
                Err(err) => {
                    if !err.completed().is_empty() {
                        report_failure(stdout, folder, options, &err, OutputFormat::Summary);
                    }
                    return Err(err.into());
                },
            }
        },
        // Per-file lines already on stdout are the record of what got renamed
        OutputFormat::Summary => {
            rename_operation(folder, options, stdout)?;
        },
    }

    stdout.flush()?;
    Ok(())
}

/// Best effort: the error itself still goes to stderr if stdout is gone.
fn report_failure(
    stdout: &mut dyn Write,
    folder: &Path,
    options: &RenameOptions,
    err: &RenameError,
    format: OutputFormat,
) {
    let failure = RenameFailure::new(folder, &options.prefix, &options.extension, err);
    let text = match format {
        OutputFormat::Json => format!("{}\n", failure.format_json()),
        OutputFormat::Summary => failure.format_summary(),
    };
    let _ = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush());
}
