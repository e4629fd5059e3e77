use derive_more::Display;

use crate::walker::Classification;

/// Totals for one run over the old tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Display)]
#[display(
    "{matched} matched, {changed} changed, {missing} missing, {same_file} same file, \
     {unreadable_files} unreadable; \
     {deleted} deleted, {delete_failures} not deleted; \
     {empty_directories} empty directories, {removed_directories} removed, \
     {remove_failures} not removed; \
     {skipped_entries} entries skipped, {unreadable_directories} directories unreadable"
)]
pub struct Summary {
    pub matched: usize,
    pub changed: usize,
    pub missing: usize,
    pub same_file: usize,
    pub unreadable_files: usize,
    pub deleted: usize,
    pub delete_failures: usize,
    pub empty_directories: usize,
    pub removed_directories: usize,
    pub remove_failures: usize,
    pub skipped_entries: usize,
    pub unreadable_directories: usize,
}

impl Summary {
    pub fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Missing => self.missing += 1,
            Classification::Changed => self.changed += 1,
            Classification::Matched => self.matched += 1,
            Classification::SameFile => self.same_file += 1,
        }
    }

    /// Number of problems that left something unclassified or undeleted.
    pub fn failures(&self) -> usize {
        self.unreadable_files
            + self.delete_failures
            + self.remove_failures
            + self.unreadable_directories
    }
}
