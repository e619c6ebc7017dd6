use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use super::args::Args;
use super::discover::discover;
use super::error::{self, MergeError};
use super::merge::merge;
use super::source::SourceFile;


#[derive(Debug, Default, PartialEq)]
pub struct MergeSummary {
    pub files_discovered: usize,
    pub files_merged: usize,
    pub imports: usize,
    pub code_lines: usize,
}

pub fn run(args: &Args) -> Result<MergeSummary> {
    info!("merging files in: {}", args.dir);
    info!("reading files with extension: {}", args.extension_filter);
    info!("skipping test files: {}", args.skip_test_files);

    let dir = Path::new(&args.dir);
    if !dir.exists() {
        return Err(MergeError::MissingInputDir(dir.to_owned()).into());
    }

    let (merged, summary) = merge_files_in_dir(dir, &args.extension_filter, args.skip_test_files)
        .context("cannot merge source files")?;

    info!("write output to: {}", args.output);
    merged.write_to_file(&args.output)?;

    info!(
        "merged {} of {} files ({} imports, {} lines of code)",
        summary.files_merged, summary.files_discovered, summary.imports, summary.code_lines
    );
    Ok(summary)
}

// Files that cannot be read are reported and left out of the result. Failing
// to walk the directory fails the whole merge.
pub fn merge_files_in_dir(
    dir: &Path,
    extension_filter: &str,
    skip_test_files: bool,
) -> error::Result<(SourceFile, MergeSummary)> {
    let paths = discover(dir, extension_filter, skip_test_files)?;

    let mut files = Vec::new();
    for path in paths.iter() {
        debug!("processing {}", path.display());
        match SourceFile::parse(path) {
            Ok(file) => files.push(file),
            Err(e) => warn!("{}", e),
        }
    }

    let files_merged = files.len();
    let merged = merge(files);
    let summary = MergeSummary {
        files_discovered: paths.len(),
        files_merged,
        imports: merged.imports.len(),
        code_lines: merged.code.len(),
    };

    Ok((merged, summary))
}
