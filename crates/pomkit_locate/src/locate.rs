//! Descriptor lookup and copy orchestration.

use std::fs;
use std::path::{Path, PathBuf};

use globset::GlobMatcher;
use log::{debug, info, warn};

use crate::report::{ReportLocate, ReportLocateBuilder};
use crate::spec::{
    C_NAME_DIR_TARGET, C_PATTERN_DIR_SCALA, C_PATTERN_DISPLAY, C_PATTERN_FILE_POM,
    CopyDescriptorError, EnumMatchClass, SpecMatchSet,
};
use crate::util::{compile_basename_glob, copy_file_overwrite, derive_destination_path};

/// Locate the build descriptor under `dir_base` and copy it into `dir_dest`.
///
/// Expands the fixed `target/scala*/*.pom` pattern rooted at `dir_base`,
/// classifies the match count and acts on the three-way branch:
/// - zero matches: a warning is printed, nothing is written,
/// - multiple matches: a warning naming the count is printed, nothing is
///   written,
/// - exactly one match: the file is copied into `dir_dest` under its own
///   basename, overwriting any existing file of that name.
///
/// The two warning branches are normal completions and return the run
/// report. Only the copy step itself can fail; that failure is returned as
/// [`CopyDescriptorError::CopyFailed`] without retry or cleanup.
pub fn copy_descriptor<P, Q>(dir_base: P, dir_dest: Q) -> Result<ReportLocate, CopyDescriptorError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_dir_base = dir_base.as_ref();
    let path_dir_dest = dir_dest.as_ref();

    let matcher_dir_scala = compile_basename_glob(C_PATTERN_DIR_SCALA)?;
    let matcher_file_pom = compile_basename_glob(C_PATTERN_FILE_POM)?;

    let mut builder_report = ReportLocateBuilder::default();
    let spec_match_set = scan_match_set(
        path_dir_base,
        &matcher_dir_scala,
        &matcher_file_pom,
        &mut builder_report,
    );

    match spec_match_set.classify() {
        EnumMatchClass::NoMatchFound => {
            warn!("Warning: Could not find pom file using path pattern: {C_PATTERN_DISPLAY}");
            builder_report.add_warning(format!(
                "No descriptor file matched pattern: {C_PATTERN_DISPLAY}"
            ));
        }
        EnumMatchClass::AmbiguousMatch => {
            let n_matches = spec_match_set.count();
            warn!(
                "Warning: Found multiple pom files {n_matches} using path pattern: {C_PATTERN_DISPLAY}"
            );
            builder_report.add_warning(format!(
                "Found {n_matches} descriptor files matching pattern: {C_PATTERN_DISPLAY}"
            ));
        }
        EnumMatchClass::UniqueMatch => {
            let path_file_src = &spec_match_set.l_paths[0];
            info!(
                "copying {} to {}",
                path_file_src.display(),
                path_dir_dest.display()
            );
            let path_file_dst = derive_destination_path(path_file_src, path_dir_dest);
            copy_file_overwrite(path_file_src, &path_file_dst).map_err(|e| {
                CopyDescriptorError::CopyFailed {
                    path: path_file_dst.clone(),
                    message: e.to_string(),
                }
            })?;
            builder_report.add_copied();
        }
    }

    Ok(builder_report.build())
}

/// Expand the fixed descriptor pattern rooted at `dir_base`.
///
/// A missing or unreadable build directory expands to an empty match set,
/// not an error.
pub fn expand_match_set<P>(dir_base: P) -> Result<SpecMatchSet, CopyDescriptorError>
where
    P: AsRef<Path>,
{
    let matcher_dir_scala = compile_basename_glob(C_PATTERN_DIR_SCALA)?;
    let matcher_file_pom = compile_basename_glob(C_PATTERN_FILE_POM)?;
    let mut builder_report = ReportLocateBuilder::default();
    Ok(scan_match_set(
        dir_base.as_ref(),
        &matcher_dir_scala,
        &matcher_file_pom,
        &mut builder_report,
    ))
}

fn scan_match_set(
    path_dir_base: &Path,
    matcher_dir_scala: &GlobMatcher,
    matcher_file_pom: &GlobMatcher,
    builder_report: &mut ReportLocateBuilder,
) -> SpecMatchSet {
    let path_dir_target = path_dir_base.join(C_NAME_DIR_TARGET);

    let iter_entries = match fs::read_dir(&path_dir_target) {
        Ok(v) => v,
        Err(e) => {
            debug!(
                "Build directory not scannable: {} ({e})",
                path_dir_target.display()
            );
            return SpecMatchSet::default();
        }
    };

    let mut l_dirs_scala: Vec<(String, PathBuf)> = Vec::new();
    for _entry_res in iter_entries {
        let entry = match _entry_res {
            Ok(v) => v,
            Err(e) => {
                builder_report.add_warning(format!(
                    "Failed to read directory entry under {} ({e})",
                    path_dir_target.display()
                ));
                continue;
            }
        };

        let path_entry = entry.path();
        let c_name = entry.file_name().to_string_lossy().to_string();
        let cfg_file_type = match entry.file_type() {
            Ok(v) => v,
            Err(e) => {
                builder_report
                    .add_warning(format!("Failed to inspect {} ({e})", path_entry.display()));
                continue;
            }
        };

        let b_is_dir =
            cfg_file_type.is_dir() || (cfg_file_type.is_symlink() && path_entry.is_dir());
        if b_is_dir && matcher_dir_scala.is_match(&c_name) {
            l_dirs_scala.push((c_name, path_entry));
        }
    }
    l_dirs_scala.sort_by(|a, b| a.0.cmp(&b.0));

    let mut l_paths_matched: Vec<PathBuf> = Vec::new();
    for (_, path_dir_scala) in l_dirs_scala {
        builder_report.add_dir_scanned();
        collect_descriptor_files(
            &path_dir_scala,
            matcher_file_pom,
            builder_report,
            &mut l_paths_matched,
        );
    }
    l_paths_matched.sort();

    SpecMatchSet {
        l_paths: l_paths_matched,
    }
}

fn collect_descriptor_files(
    path_dir_scala: &Path,
    matcher_file_pom: &GlobMatcher,
    builder_report: &mut ReportLocateBuilder,
    l_paths_matched: &mut Vec<PathBuf>,
) {
    let iter_entries = match fs::read_dir(path_dir_scala) {
        Ok(v) => v,
        Err(e) => {
            builder_report.add_warning(format!(
                "Failed to read directory {} ({e})",
                path_dir_scala.display()
            ));
            return;
        }
    };

    for _entry_res in iter_entries {
        let entry = match _entry_res {
            Ok(v) => v,
            Err(e) => {
                builder_report.add_warning(format!(
                    "Failed to read directory entry under {} ({e})",
                    path_dir_scala.display()
                ));
                continue;
            }
        };

        let path_entry = entry.path();
        let c_name = entry.file_name().to_string_lossy().to_string();
        let cfg_file_type = match entry.file_type() {
            Ok(v) => v,
            Err(e) => {
                builder_report
                    .add_warning(format!("Failed to inspect {} ({e})", path_entry.display()));
                continue;
            }
        };

        builder_report.add_file_scanned();

        let b_is_file =
            cfg_file_type.is_file() || (cfg_file_type.is_symlink() && path_entry.is_file());
        if b_is_file && matcher_file_pom.is_match(&c_name) {
            builder_report.add_matched();
            l_paths_matched.push(path_entry);
        }
    }
}
