// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Process utilities

use crate::error::RunError;
use log::{debug, warn};
use nix::sys::signal::Signal;
use std::borrow::Cow;
use std::io::Write;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Something that can run a program to completion and report its exit code.
pub trait Runner {
    /// Run `program` with `args`, through the elevation wrapper when
    /// `elevated` is set. Returns the child's exit code.
    fn run(&mut self, program: &Path, args: &[String], elevated: bool) -> Result<i32, RunError>;
}

/// Spawns real child processes with inherited stdio.
pub struct SystemRunner {
    elevator: PathBuf,
}

impl SystemRunner {
    pub fn new(elevator: impl Into<PathBuf>) -> Self {
        Self { elevator: elevator.into() }
    }
}

impl Runner for SystemRunner {
    fn run(&mut self, program: &Path, args: &[String], elevated: bool) -> Result<i32, RunError> {
        let (mut command, spawned) = if elevated {
            let mut command = Command::new(&self.elevator);
            command.arg(program);
            (command, self.elevator.as_path())
        } else {
            (Command::new(program), program)
        };
        command.args(args);

        debug!("running: {}", command_line(elevated.then_some(self.elevator.as_path()), program, args));

        let status = command.status().map_err(|source| RunError::Spawn {
            program: spawned.to_path_buf(),
            source,
        })?;

        Ok(exit_code(status, program))
    }
}

/// Prints each command line instead of running it. Every command "succeeds".
pub struct EchoRunner<W> {
    elevator: PathBuf,
    out: W,
}

impl<W: Write> EchoRunner<W> {
    pub fn new(elevator: impl Into<PathBuf>, out: W) -> Self {
        Self { elevator: elevator.into(), out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Runner for EchoRunner<W> {
    fn run(&mut self, program: &Path, args: &[String], elevated: bool) -> Result<i32, RunError> {
        let line = command_line(elevated.then_some(self.elevator.as_path()), program, args);
        writeln!(self.out, "{}", line)?;
        Ok(0)
    }
}

/// Render a command as a single shell-quoted line.
pub fn command_line(elevator: Option<&Path>, program: &Path, args: &[String]) -> String {
    let mut words: Vec<Cow<'_, str>> = Vec::with_capacity(args.len() + 2);
    if let Some(elevator) = elevator {
        words.push(elevator.to_string_lossy());
    }
    words.push(program.to_string_lossy());
    words.extend(args.iter().map(|a| Cow::Borrowed(a.as_str())));
    shell_words::join(words)
}

/// Map a child's exit status to a shell-style exit code.
///
/// A child killed by a signal reports `128 + signo`, the same as a shell.
pub fn exit_code(status: ExitStatus, program: &Path) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    match status.signal() {
        Some(signo) => {
            let name = Signal::try_from(signo).map(Signal::as_str).unwrap_or("unknown signal");
            warn!("{} terminated by {}", program.display(), name);
            128 + signo
        }
        None => 1,
    }
}
