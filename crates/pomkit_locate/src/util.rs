use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};

use crate::spec::CopyDescriptorError;

////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

pub(crate) fn compile_basename_glob(pattern: &str) -> Result<GlobMatcher, CopyDescriptorError> {
    let matcher = Glob::new(pattern)
        .map_err(|e| {
            CopyDescriptorError::InvalidPattern(format!("Invalid pattern `{pattern}`: {e}"))
        })?
        .compile_matcher();
    Ok(matcher)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PathUtilities

/// Derive destination path for a matched descriptor file.
///
/// The source basename is preserved and the file lands directly in
/// `path_dir_dst` (flatten semantics; no tree structure to keep).
pub(crate) fn derive_destination_path(path_file_src: &Path, path_dir_dst: &Path) -> PathBuf {
    match path_file_src.file_name() {
        Some(name_file) => path_dir_dst.join(name_file),
        None => path_dir_dst.join(path_file_src),
    }
}

/// Copy one file, replacing any existing destination file of the same name.
///
/// `fs::copy` truncates an existing destination and carries the source
/// permission bits; no timestamps or extended attributes are preserved.
pub(crate) fn copy_file_overwrite(
    path_file_src: &Path,
    path_file_dst: &Path,
) -> Result<(), io::Error> {
    fs::copy(path_file_src, path_file_dst)?;
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
