//! Command to list the media files of a directory.

use crate::error::CliError;
use crate::utils::{load_configuration, path_to_str, GlobalOptions, HostCapabilities};
use clap::{Args, ValueEnum};
use dirload::media::{DirectoryLister, FileKind, FileProber, FilteredListing, MediaFilter};
use dirload::natsort::natural_sort;
use dirload::path::Platform;
use serde::Serialize;
use std::path::PathBuf;

/// List the media files of a directory in natural order.
#[derive(Args)]
pub struct ScanCommand {
    /// Directory to scan
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: ScanOutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ScanOutputFormat {
    /// One file name per line
    Human,
    /// JSON object with the directory and its files
    Json,
}

#[derive(Serialize)]
struct ScanResult<'a> {
    dir: &'a str,
    files: &'a [String],
    warnings: &'a [String],
}

impl ScanCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let dir = path_to_str(&self.dir)?;
        let host = HostCapabilities::new();

        if host.prober.probe(dir) != Some(FileKind::Directory) {
            return Err(CliError::InvalidArguments(format!(
                "not a directory: {dir}"
            )));
        }

        let names = host.lister.list_files(dir)?;
        let total = names.len();
        let FilteredListing {
            media: mut files,
            warnings,
        } = MediaFilter::from_config(&config).filter(
            Platform::current(),
            dir,
            names,
            &host.classifier,
        );
        natural_sort(&mut files, config.case_sensitive_or_default());

        match self.format {
            ScanOutputFormat::Human => {
                for file in &files {
                    println!("{file}");
                }
                if !global.quiet {
                    for warning in &warnings {
                        eprintln!("Warning: {warning}");
                    }
                    eprintln!("Found {} media file(s) among {total} in {dir}", files.len());
                }
            }
            ScanOutputFormat::Json => {
                let result = ScanResult {
                    dir,
                    files: &files,
                    warnings: &warnings,
                };
                let json = serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::Config(format!("JSON serialization failed: {e}")))?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
