// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Command dispatcher

use crate::config::ToolPaths;
use crate::ops::{self, Plan};
use log::debug;
use rutils::{RunError, Runner};
use std::io::Write;

pub struct Dispatcher<'a, R, O, E> {
    paths: &'a ToolPaths,
    runner: R,
    out: O,
    err: E,
}

impl<'a, R: Runner, O: Write, E: Write> Dispatcher<'a, R, O, E> {
    /// `out` receives the help text, `err` the informational notices.
    pub fn new(paths: &'a ToolPaths, runner: R, out: O, err: E) -> Self {
        Self {
            paths,
            runner,
            out,
            err,
        }
    }

    /// Run whatever `tokens` resolve to and return the exit code to report.
    pub fn dispatch(&mut self, tokens: &[String]) -> Result<i32, RunError> {
        let (operation, notice, steps) = match ops::plan(tokens) {
            Plan::Help => {
                write!(self.out, "{}", ops::help_text())?;
                return Ok(0);
            }
            Plan::Run {
                operation,
                notice,
                steps,
            } => (operation, notice, steps),
        };

        debug!("{:?}: {} step(s)", operation, steps.len());

        for line in notice {
            writeln!(self.err, "{}", line)?;
        }

        let mut code = 0;
        for step in &steps {
            code = self
                .runner
                .run(self.paths.path(step.tool), &step.args, step.elevated)?;
            if code != 0 {
                debug!("{:?} stopped: step exited with {}", operation, code);
                break;
            }
        }
        Ok(code)
    }

    #[cfg(test)]
    fn into_parts(self) -> (R, O, E) {
        (self.runner, self.out, self.err)
    }
}
