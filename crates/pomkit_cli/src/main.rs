//! Console entry point: copy the build descriptor to the invocation directory.
//!
//! No flags, no arguments; behavior is determined entirely by the current
//! working directory's contents under `target/scala*/`.

use std::env;

use env_logger::{Env, Target};
use log::debug;

use pomkit_locate::{CopyDescriptorError, copy_descriptor};

fn main() -> Result<(), CopyDescriptorError> {
    // Level/timestamp decoration off and writer on stdout, so the emitted
    // lines are the bare console messages.
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_level(false)
        .format_timestamp(None)
        .format_target(false)
        .target(Target::Stdout)
        .init();

    let dir_current = env::current_dir()
        .map_err(|e| CopyDescriptorError::WorkingDirUnavailable(e.to_string()))?;

    let report = copy_descriptor(&dir_current, &dir_current)?;
    debug!("{report}");
    Ok(())
}
