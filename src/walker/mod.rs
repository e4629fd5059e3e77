//! Depth-first walk of the old tree.
//!
//! Every regular file under the old root is classified against the file at
//! the same relative path under the new root. Matched files can be deleted,
//! and directories left empty afterwards can be removed.

mod classification;
mod delete_outcome;
mod old_entry;
mod summary;
mod traversal_frame;
mod tree_walker;

pub use classification::Classification;
pub use delete_outcome::DeleteOutcome;
pub use old_entry::{DirectoryListing, OldEntry};
pub use summary::Summary;
pub use traversal_frame::TraversalFrame;
pub use tree_walker::{TreeWalker, WalkError, WalkOptions};
