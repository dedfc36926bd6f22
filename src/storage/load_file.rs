use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::memory::arena::{ArenaScope, ArenaSlice};

#[derive(Debug, Error)]
pub enum LoadFileError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },
}

/// Reads a whole file into a region pushed onto `scope`.
///
/// The bytes live until the scope is dropped. A file larger than the remaining arena
/// capacity panics in [`ArenaScope::push`].
pub fn load_file_into(
    scope: &mut ArenaScope<'_>,
    path: &Path,
) -> Result<ArenaSlice, LoadFileError> {
    let io_error = |source| LoadFileError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_error)?;
    let len = file.metadata().map_err(io_error)?.len();
    let slice = scope.push(usize::try_from(len).unwrap_or(usize::MAX));

    file.read_exact(scope.bytes_mut(slice)).map_err(io_error)?;

    Ok(slice)
}

/// Views a loaded region as source text.
pub fn source_text<'s>(
    scope: &'s ArenaScope<'_>,
    slice: ArenaSlice,
    path: &Path,
) -> Result<&'s str, LoadFileError> {
    std::str::from_utf8(scope.bytes(slice)).map_err(|_| LoadFileError::NotUtf8 {
        path: path.to_path_buf(),
    })
}
