use std::fs::File;
use std::path::Path;

use digest::Digest;
use md5::Md5;
use snafu::ResultExt;

use super::{CHUNK_SIZE, CompareError, OpenSnafu, ReadSnafu, read_chunk};

/// Compares the MD5 digests of two files. Both files are always read to the
/// end, even when they differ in their first bytes.
pub fn checksums_equal(left: &Path, right: &Path) -> Result<bool, CompareError> {
    let left_digest = file_digest(left, Md5::new())?;
    let right_digest = file_digest(right, Md5::new())?;
    Ok(left_digest == right_digest)
}

fn file_digest(path: &Path, mut hasher: impl Digest) -> Result<Vec<u8>, CompareError> {
    let mut file = File::open(path).context(OpenSnafu { path })?;
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let bytes_read = read_chunk(&mut file, &mut buffer).context(ReadSnafu { path })?;
        hasher.update(&buffer[..bytes_read]);
        if bytes_read < CHUNK_SIZE {
            break;
        }
    }

    Ok(hasher.finalize().to_vec())
}
