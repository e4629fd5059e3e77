use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use snafu::{Report, ResultExt, Snafu};
use tracing::{debug, error, warn};

use crate::compare::ComparisonMode;
use crate::ext::BestEffortPathExt;
use crate::report::{ReportLine, Reporter};
use crate::walker::classification::candidate_path;
use crate::walker::{
    Classification, DeleteOutcome, DirectoryListing, OldEntry, Summary, TraversalFrame,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Delete matched files and remove directories left empty.
    pub delete: bool,
    pub comparison_mode: ComparisonMode,
}

/// Walks the old tree depth-first, classifying every file against the new
/// tree and, when deleting, pruning matched files and emptied directories.
///
/// Problems with single entries are reported and counted, never fatal. Only
/// failing to list the old root or to write the report stops the walk.
pub struct TreeWalker<W: Write> {
    reporter: Reporter<W>,
    options: WalkOptions,
    summary: Summary,
}

impl<W: Write> TreeWalker<W> {
    pub fn new(reporter: Reporter<W>, options: WalkOptions) -> Self {
        Self {
            reporter,
            options,
            summary: Summary::default(),
        }
    }

    /// Walks `old_root` against `new_root` and returns the totals of this run.
    pub fn run(&mut self, old_root: &Path, new_root: &Path) -> Result<Summary, WalkError> {
        let frame = TraversalFrame::root(old_root, new_root);
        debug!(
            "Walking {} against {} ({} comparison, delete: {})",
            old_root.display(),
            new_root.display(),
            self.options.comparison_mode,
            self.options.delete
        );

        let listing =
            DirectoryListing::read(&frame).context(RootListingSnafu { path: old_root })?;
        self.walk_listing(&frame, listing)?;
        self.reporter.flush().context(ReportSnafu)?;

        Ok(std::mem::take(&mut self.summary))
    }

    #[cfg(test)]
    pub fn into_reporter(self) -> Reporter<W> {
        self.reporter
    }

    /// Processes one directory below the root. A directory that cannot be
    /// listed is reported and left alone.
    fn walk(&mut self, frame: TraversalFrame) -> Result<(), WalkError> {
        match DirectoryListing::read(&frame) {
            Ok(listing) => self.walk_listing(&frame, listing),
            Err(source) => {
                warn!(
                    "Failed to read directory {}: {}",
                    frame.old_dir.best_effort_path_display(),
                    source
                );
                self.summary.unreadable_directories += 1;
                self.report(frame.depth, ReportLine::ReadFailed(frame.old_dir))
            }
        }
    }

    fn walk_listing(
        &mut self,
        frame: &TraversalFrame,
        listing: DirectoryListing,
    ) -> Result<(), WalkError> {
        self.summary.skipped_entries += listing.skipped;
        self.report(
            frame.depth,
            ReportLine::DirectoryHeader {
                path: frame.old_dir.clone(),
                count: listing.files.len(),
            },
        )?;

        for file in &listing.files {
            self.process_file(frame, file)?;
        }

        for directory in &listing.directories {
            self.walk(frame.child(&directory.name))?;
        }

        self.prune_if_empty(frame)
    }

    fn process_file(&mut self, frame: &TraversalFrame, entry: &OldEntry) -> Result<(), WalkError> {
        let level = frame.depth + 1;
        let candidate = candidate_path(&frame.new_dir, entry);

        let classification =
            match Classification::of(entry, &candidate, self.options.comparison_mode) {
                Ok(classification) => classification,
                Err(source) => {
                    warn!(
                        "Leaving {} alone, it could not be compared: {}",
                        entry.relative_path.display(),
                        Report::from_error(source)
                    );
                    self.summary.unreadable_files += 1;
                    return self.report(
                        level,
                        ReportLine::CompareFailed(entry.relative_path.clone()),
                    );
                }
            };

        debug!(
            "{} -> {}: {}",
            entry.path.display(),
            candidate.display(),
            classification
        );
        if classification == Classification::SameFile {
            warn!(
                "Leaving {} alone, {} resolves to the same file",
                entry.relative_path.display(),
                candidate.best_effort_path_display()
            );
        }
        self.summary.record(classification);
        self.report(
            level,
            ReportLine::classified(classification, entry.relative_path.clone()),
        )?;

        if classification == Classification::Matched && self.options.delete {
            self.delete_file(level, entry)?;
        }

        Ok(())
    }

    fn delete_file(&mut self, level: usize, entry: &OldEntry) -> Result<(), WalkError> {
        self.report(level, ReportLine::Deleting(entry.relative_path.clone()))?;

        match DeleteOutcome::remove_file(&entry.path) {
            DeleteOutcome::Removed => {
                self.summary.deleted += 1;
                Ok(())
            }
            DeleteOutcome::PermissionDenied => {
                debug!("Permission denied deleting {}", entry.path.display());
                self.summary.delete_failures += 1;
                self.report(level, ReportLine::DeleteFailed(entry.relative_path.clone()))
            }
            DeleteOutcome::Failed(source) => {
                error!(
                    "Failed to delete {}: {}",
                    entry.path.best_effort_path_display(),
                    source
                );
                self.summary.delete_failures += 1;
                self.report(level, ReportLine::DeleteFailed(entry.relative_path.clone()))
            }
        }
    }

    /// Re-lists the directory after its files and subdirectories were handled
    /// and removes it when nothing is left.
    fn prune_if_empty(&mut self, frame: &TraversalFrame) -> Result<(), WalkError> {
        let is_empty = match fs::read_dir(&frame.old_dir) {
            Ok(mut entries) => entries.next().is_none(),
            Err(source) => {
                warn!(
                    "Failed to re-read directory {}: {}",
                    frame.old_dir.best_effort_path_display(),
                    source
                );
                return Ok(());
            }
        };

        if !is_empty {
            return Ok(());
        }

        self.summary.empty_directories += 1;
        self.report(frame.depth, ReportLine::Empty(frame.old_dir.clone()))?;

        if !self.options.delete {
            return Ok(());
        }

        self.report(frame.depth, ReportLine::Removing(frame.old_dir.clone()))?;
        match DeleteOutcome::remove_dir(&frame.old_dir) {
            DeleteOutcome::Removed => {
                self.summary.removed_directories += 1;
                Ok(())
            }
            DeleteOutcome::PermissionDenied => {
                debug!("Permission denied removing {}", frame.old_dir.display());
                self.summary.remove_failures += 1;
                self.report(frame.depth, ReportLine::RemoveFailed(frame.old_dir.clone()))
            }
            DeleteOutcome::Failed(source) => {
                error!(
                    "Failed to remove {}: {}",
                    frame.old_dir.best_effort_path_display(),
                    source
                );
                self.summary.remove_failures += 1;
                self.report(frame.depth, ReportLine::RemoveFailed(frame.old_dir.clone()))
            }
        }
    }

    fn report(&mut self, level: usize, line: ReportLine) -> Result<(), WalkError> {
        self.reporter.line(level, &line).context(ReportSnafu)
    }
}

#[derive(Debug, Snafu)]
pub enum WalkError {
    #[snafu(display("Failed to list the old directory {}", path.best_effort_path_display()))]
    RootListingError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to write the report"))]
    ReportError { source: io::Error },
}
