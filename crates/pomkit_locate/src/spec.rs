//! Descriptor pattern constants, match-set model and top-level error types.

use std::fmt;
use std::path::{Path, PathBuf};

////////////////////////////////////////////////////////////////////////////////
// #region Constants

/// Build output directory scanned for descriptor files.
pub const C_NAME_DIR_TARGET: &str = "target";
/// Glob applied to subdirectory basenames under the build output directory.
pub const C_PATTERN_DIR_SCALA: &str = "scala*";
/// Glob applied to file basenames inside matched subdirectories.
pub const C_PATTERN_FILE_POM: &str = "*.pom";
/// Human-readable form of the full pattern, used in console messages.
pub const C_PATTERN_DISPLAY: &str = "target/scala*/*.pom";

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Cardinality classification of one pattern expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumMatchClass {
    /// No path matched the pattern.
    NoMatchFound,
    /// Exactly one path matched the pattern.
    UniqueMatch,
    /// More than one path matched the pattern.
    AmbiguousMatch,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Ordered pattern expansion result for one run.
///
/// The path list is immutable once the expansion returns; it is sorted by
/// path so repeated runs over the same tree classify identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecMatchSet {
    /// Matched descriptor paths, sorted.
    pub l_paths: Vec<PathBuf>,
}

impl SpecMatchSet {
    /// Number of matched paths.
    pub fn count(&self) -> usize {
        self.l_paths.len()
    }

    /// Classify the match count (zero / one / many).
    pub fn classify(&self) -> EnumMatchClass {
        match self.l_paths.len() {
            0 => EnumMatchClass::NoMatchFound,
            1 => EnumMatchClass::UniqueMatch,
            _ => EnumMatchClass::AmbiguousMatch,
        }
    }

    /// The sole matched path, when the set is a unique match.
    pub fn path_unique(&self) -> Option<&Path> {
        match self.l_paths.as_slice() {
            [path_file] => Some(path_file.as_path()),
            _ => None,
        }
    }
}

/// "Top-level call failed" errors (setup and copy stage).
///
/// Zero or multiple matches are not errors; they are classifications that
/// produce printed warnings and a normal exit.
#[derive(Debug)]
pub enum CopyDescriptorError {
    /// A basename glob failed to compile.
    InvalidPattern(String),
    /// Copying the sole matched descriptor failed.
    CopyFailed {
        /// Destination path of the failed copy.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Ambient working directory could not be resolved.
    WorkingDirUnavailable(String),
}

impl fmt::Display for CopyDescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern(msg) => write!(f, "{msg}"),
            Self::CopyFailed { path, message } => {
                write!(f, "Failed to copy descriptor to {}: {message}", path.display())
            }
            Self::WorkingDirUnavailable(msg) => {
                write!(f, "Failed to resolve working directory: {msg}")
            }
        }
    }
}

impl std::error::Error for CopyDescriptorError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
