//! Run report model and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;

/// Aggregate counters and diagnostics for one `copy_descriptor` run.
#[derive(Debug, Default, Clone)]
pub struct ReportLocate {
    /// Number of `scala*` build subdirectories scanned.
    pub cnt_dirs_scanned: u64,
    /// Total file entries examined inside scanned subdirectories.
    pub cnt_files_scanned: u64,
    /// Number of entries that matched the descriptor pattern.
    pub cnt_matched: u64,
    /// Number of descriptors copied (0 or 1).
    pub cnt_copied: u64,
    /// Non-fatal warnings collected during traversal/classification.
    pub warnings: Vec<String>,
}

impl ReportLocate {
    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_dirs_scanned".to_string(), self.cnt_dirs_scanned);
        dict_counts.insert("cnt_files_scanned".to_string(), self.cnt_files_scanned);
        dict_counts.insert("cnt_matched".to_string(), self.cnt_matched);
        dict_counts.insert("cnt_copied".to_string(), self.cnt_copied);
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} dirs={} files={} matched={} copied={} warnings={}",
            dict_counts["cnt_dirs_scanned"],
            dict_counts["cnt_files_scanned"],
            dict_counts["cnt_matched"],
            dict_counts["cnt_copied"],
            dict_counts["cnt_warnings"]
        )
    }
}

impl fmt::Display for ReportLocate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[POM]"))
    }
}

/// Mutable accumulator for locate statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportLocateBuilder {
    /// See [`ReportLocate::cnt_dirs_scanned`].
    pub cnt_dirs_scanned: u64,
    /// See [`ReportLocate::cnt_files_scanned`].
    pub cnt_files_scanned: u64,
    /// See [`ReportLocate::cnt_matched`].
    pub cnt_matched: u64,
    /// See [`ReportLocate::cnt_copied`].
    pub cnt_copied: u64,
    /// See [`ReportLocate::warnings`].
    pub warnings: Vec<String>,
}

impl ReportLocateBuilder {
    /// Increment scanned subdirectory count by one.
    pub fn add_dir_scanned(&mut self) {
        self.cnt_dirs_scanned += 1;
    }

    /// Increment examined file entry count by one.
    pub fn add_file_scanned(&mut self) {
        self.cnt_files_scanned += 1;
    }

    /// Increment matched count by one.
    pub fn add_matched(&mut self) {
        self.cnt_matched += 1;
    }

    /// Increment copied count by one.
    pub fn add_copied(&mut self) {
        self.cnt_copied += 1;
    }

    /// Add warning message.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportLocate {
        ReportLocate {
            cnt_dirs_scanned: self.cnt_dirs_scanned,
            cnt_files_scanned: self.cnt_files_scanned,
            cnt_matched: self.cnt_matched,
            cnt_copied: self.cnt_copied,
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReportLocate;

    #[test]
    fn report_locate_to_dict_and_format_agree() {
        let report = ReportLocate {
            cnt_dirs_scanned: 2,
            cnt_files_scanned: 7,
            cnt_matched: 1,
            cnt_copied: 1,
            warnings: vec!["w".to_string()],
        };

        let dict_counts = report.to_dict();
        assert_eq!(dict_counts["cnt_dirs_scanned"], 2);
        assert_eq!(dict_counts["cnt_files_scanned"], 7);
        assert_eq!(dict_counts["cnt_matched"], 1);
        assert_eq!(dict_counts["cnt_copied"], 1);
        assert_eq!(dict_counts["cnt_warnings"], 1);

        let txt = report.format("[POM]");
        assert_eq!(txt, "[POM] dirs=2 files=7 matched=1 copied=1 warnings=1");
        assert_eq!(report.to_string(), txt);
    }
}
