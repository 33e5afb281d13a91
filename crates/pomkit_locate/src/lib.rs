//! `pomkit_locate` v1:
//! build-output descriptor lookup and copy engine.
//!
//! - `locate` : pattern expansion and copy orchestration
//! - `spec`   : constants, match-set model, error types
//! - `report` : run-time report model
//! - `util`   : shared helper functions

pub mod locate;
pub mod report;
pub mod spec;
mod util;

pub use locate::{copy_descriptor, expand_match_set};
pub use report::{ReportLocate, ReportLocateBuilder};
pub use spec::{
    C_NAME_DIR_TARGET, C_PATTERN_DIR_SCALA, C_PATTERN_DISPLAY, C_PATTERN_FILE_POM,
    CopyDescriptorError, EnumMatchClass, SpecMatchSet,
};
