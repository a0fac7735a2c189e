// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! rutils - Rustica Utilities Library
//!
//! Shared utilities for Rustica OS applications.

pub mod error;
pub mod process;

pub use error::RunError;
pub use process::{command_line, exit_code, EchoRunner, Runner, SystemRunner};
