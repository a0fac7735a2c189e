// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Executable locations

use crate::ops::Tool;
use std::path::{Path, PathBuf};

pub const DEFAULT_APT: &str = "/usr/bin/apt";
pub const DEFAULT_APT_MARK: &str = "/usr/bin/apt-mark";
pub const DEFAULT_SUDO: &str = "sudo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub apt: PathBuf,
    pub apt_mark: PathBuf,
    /// Wrapper used for elevated commands.
    pub sudo: PathBuf,
}

impl ToolPaths {
    pub fn path(&self, tool: Tool) -> &Path {
        match tool {
            Tool::Apt => &self.apt,
            Tool::AptMark => &self.apt_mark,
        }
    }
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            apt: PathBuf::from(DEFAULT_APT),
            apt_mark: PathBuf::from(DEFAULT_APT_MARK),
            sudo: PathBuf::from(DEFAULT_SUDO),
        }
    }
}
