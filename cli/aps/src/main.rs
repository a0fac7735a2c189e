// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! aps - APT Shortcut Wrapper
//!
//! Maps short aliases (`up`, `in`, `rm`, ...) onto apt invocations, running
//! privileged ones through sudo. Anything it does not recognise goes to apt
//! untouched.

mod config;
mod dispatch;
mod ops;

use anyhow::Result;
use clap::Parser;
use config::{ToolPaths, DEFAULT_APT, DEFAULT_APT_MARK, DEFAULT_SUDO};
use dispatch::Dispatcher;
use rutils::{EchoRunner, SystemRunner};
use std::env;
use std::io;
use std::path::PathBuf;

/// APT shortcut wrapper
#[derive(Parser, Debug)]
#[command(name = "aps")]
#[command(author = "The Rustux Authors")]
#[command(about = "Short aliases for apt", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// apt executable
    #[arg(long, env = "APS_APT", default_value = DEFAULT_APT)]
    apt_path: PathBuf,

    /// apt-mark executable
    #[arg(long, env = "APS_APT_MARK", default_value = DEFAULT_APT_MARK)]
    apt_mark_path: PathBuf,

    /// Wrapper used for privileged commands
    #[arg(long, env = "APS_SUDO", default_value = DEFAULT_SUDO)]
    sudo_path: PathBuf,

    /// Print the commands instead of running them
    #[arg(long)]
    dry_run: bool,
}

const VALUE_OPTIONS: &[&str] = &["--apt-path", "--apt-mark-path", "--sudo-path"];
const FLAG_OPTIONS: &[&str] = &["--dry-run"];

/// Split argv into aps's own leading options and the tokens to dispatch.
///
/// Options are only recognised before the first token. The tokens are
/// returned untouched, including any `--`, so clap never sees them.
fn split_args(argv: Vec<String>) -> (Vec<String>, Vec<String>) {
    let mut iter = argv.into_iter();
    let mut options: Vec<String> = iter.next().into_iter().collect();

    while let Some(arg) = iter.next() {
        let name = arg.split_once('=').map_or(arg.as_str(), |(name, _)| name);
        if FLAG_OPTIONS.contains(&arg.as_str()) {
            options.push(arg);
        } else if VALUE_OPTIONS.contains(&name) {
            let inline = name.len() < arg.len();
            options.push(arg);
            if !inline {
                options.extend(iter.next());
            }
        } else {
            let mut tokens = vec![arg];
            tokens.extend(iter);
            return (options, tokens);
        }
    }

    (options, Vec::new())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("APS_LOG", "warn")).init();

    let (options, tokens) = split_args(env::args().collect());
    let args = Args::parse_from(options);
    let paths = ToolPaths {
        apt: args.apt_path,
        apt_mark: args.apt_mark_path,
        sudo: args.sudo_path,
    };

    let code = if args.dry_run {
        let runner = EchoRunner::new(&paths.sudo, io::stdout());
        Dispatcher::new(&paths, runner, io::stdout(), io::stderr()).dispatch(&tokens)?
    } else {
        let runner = SystemRunner::new(&paths.sudo);
        Dispatcher::new(&paths, runner, io::stdout(), io::stderr()).dispatch(&tokens)?
    };

    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(words: &[&str]) -> Vec<String> {
        std::iter::once("aps")
            .chain(words.iter().copied())
            .map(str::to_string)
            .collect()
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn leading_options_are_split_from_tokens() {
        let (options, tokens) = split_args(argv(&[
            "--apt-path",
            "/opt/apt",
            "--sudo-path=doas",
            "--dry-run",
            "in",
            "--apt-path",
            "x",
        ]));
        assert_eq!(
            options,
            strings(&["aps", "--apt-path", "/opt/apt", "--sudo-path=doas", "--dry-run"])
        );
        assert_eq!(tokens, strings(&["in", "--apt-path", "x"]));

        let args = Args::parse_from(options);
        assert_eq!(args.apt_path, PathBuf::from("/opt/apt"));
        assert_eq!(args.sudo_path, PathBuf::from("doas"));
        assert!(args.dry_run);
    }

    #[test]
    fn double_dash_is_kept_as_a_token() {
        let (options, tokens) = split_args(argv(&["--dry-run", "--", "show", "x"]));
        assert_eq!(options, strings(&["aps", "--dry-run"]));
        assert_eq!(tokens, strings(&["--", "show", "x"]));

        let (_, tokens) = split_args(argv(&["--"]));
        assert_eq!(tokens, strings(&["--"]));
    }

    #[test]
    fn hyphen_tokens_are_not_options() {
        for first in ["--version", "--help", "-h", "-y"] {
            let (options, tokens) = split_args(argv(&[first, "install", "x"]));
            assert_eq!(options, strings(&["aps"]), "{}", first);
            assert_eq!(tokens, strings(&[first, "install", "x"]), "{}", first);
        }
    }

    #[test]
    fn no_tokens_means_help() {
        let (options, tokens) = split_args(argv(&["--dry-run"]));
        assert_eq!(options, strings(&["aps", "--dry-run"]));
        assert!(tokens.is_empty());
    }
}
