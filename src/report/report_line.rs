use std::path::PathBuf;

use colored::Color;
use derive_more::Display;

use crate::walker::Classification;

/// A single line of the human readable report written while walking.
///
/// File lines carry the path relative to the old root, directory lines the
/// directory path as reached from the old root argument.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ReportLine {
    #[display("{}: {count} files:", path.display())]
    DirectoryHeader { path: PathBuf, count: usize },
    #[display("Missing: {}", _0.display())]
    Missing(PathBuf),
    #[display("Changed: {}", _0.display())]
    Changed(PathBuf),
    #[display("Matched: {}", _0.display())]
    Matched(PathBuf),
    #[display("Same file: {}", _0.display())]
    SameFile(PathBuf),
    #[display("Failed to compare: {}", _0.display())]
    CompareFailed(PathBuf),
    #[display("DELETING: {}", _0.display())]
    Deleting(PathBuf),
    #[display("Failed to delete: {}", _0.display())]
    DeleteFailed(PathBuf),
    #[display("Empty: {}", _0.display())]
    Empty(PathBuf),
    #[display("REMOVING: {}", _0.display())]
    Removing(PathBuf),
    #[display("Failed to remove: {}", _0.display())]
    RemoveFailed(PathBuf),
    #[display("Failed to read: {}", _0.display())]
    ReadFailed(PathBuf),
}

impl ReportLine {
    pub fn classified(classification: Classification, relative_path: PathBuf) -> Self {
        match classification {
            Classification::Missing => ReportLine::Missing(relative_path),
            Classification::Changed => ReportLine::Changed(relative_path),
            Classification::Matched => ReportLine::Matched(relative_path),
            Classification::SameFile => ReportLine::SameFile(relative_path),
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            ReportLine::DirectoryHeader { .. } => None,
            ReportLine::Missing(_) => Some(Color::Cyan),
            ReportLine::Changed(_) | ReportLine::SameFile(_) => Some(Color::Yellow),
            ReportLine::Matched(_) | ReportLine::Empty(_) => Some(Color::Green),
            ReportLine::Deleting(_) | ReportLine::Removing(_) => Some(Color::Magenta),
            ReportLine::CompareFailed(_)
            | ReportLine::DeleteFailed(_)
            | ReportLine::RemoveFailed(_)
            | ReportLine::ReadFailed(_) => Some(Color::Red),
        }
    }
}
