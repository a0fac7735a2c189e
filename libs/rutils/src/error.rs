// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Process errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to get a child process running at all.
///
/// A child that starts and then exits nonzero is not an error; its exit code
/// is returned as-is.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to run {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output")]
    Output(#[from] io::Error),
}
