use std::fs::File;
use std::path::Path;

use snafu::ResultExt;

use super::{CHUNK_SIZE, CompareError, OpenSnafu, ReadSnafu, read_chunk};

/// Compares two files chunk by chunk, returning `false` as soon as a chunk
/// differs or one stream ends before the other.
///
/// Failing to open or read either file is an error, never an answer.
pub fn files_equal(left: &Path, right: &Path) -> Result<bool, CompareError> {
    let mut left_file = File::open(left).context(OpenSnafu { path: left })?;
    let mut right_file = File::open(right).context(OpenSnafu { path: right })?;

    let mut left_buf = [0u8; CHUNK_SIZE];
    let mut right_buf = [0u8; CHUNK_SIZE];

    loop {
        let left_len = read_chunk(&mut left_file, &mut left_buf).context(ReadSnafu { path: left })?;
        let right_len =
            read_chunk(&mut right_file, &mut right_buf).context(ReadSnafu { path: right })?;

        if left_buf[..left_len] != right_buf[..right_len] {
            return Ok(false);
        }
        if left_len < CHUNK_SIZE {
            // Both chunks are equal, so both streams ended here.
            return Ok(true);
        }
    }
}
