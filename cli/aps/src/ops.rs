// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Alias table and operation planning

/// Executables aps knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Apt,
    AptMark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Refresh,
    Upgrade,
    SoftUpgrade,
    Install,
    Reinstall,
    Remove,
    Autoremove,
    Mark,
    Search,
    Help,
    Passthrough,
}

impl Operation {
    pub fn tool(self) -> Tool {
        match self {
            Operation::Mark => Tool::AptMark,
            _ => Tool::Apt,
        }
    }

    /// Arguments placed ahead of the forwarded ones.
    pub fn prefix(self) -> &'static [&'static str] {
        match self {
            Operation::Refresh => &["update"],
            Operation::Upgrade => &["full-upgrade"],
            Operation::SoftUpgrade => &["upgrade"],
            Operation::Install => &["install", "--no-install-recommends"],
            Operation::Reinstall => &["reinstall"],
            Operation::Remove => &["remove"],
            Operation::Autoremove => &["autoremove"],
            Operation::Search => &["search", "--names-only"],
            Operation::Mark | Operation::Help | Operation::Passthrough => &[],
        }
    }

    pub fn elevated(self) -> bool {
        !matches!(
            self,
            Operation::Search | Operation::Help | Operation::Passthrough
        )
    }

    /// Whether the package lists must be refreshed successfully first.
    pub fn needs_refresh(self) -> bool {
        matches!(
            self,
            Operation::Upgrade | Operation::SoftUpgrade | Operation::Install | Operation::Reinstall
        )
    }

    fn summary(self) -> &'static str {
        match self {
            Operation::Refresh => "refresh package lists",
            Operation::Upgrade => "refresh, then full-upgrade (may remove packages)",
            Operation::SoftUpgrade => "refresh, then upgrade without removing packages",
            Operation::Install => "refresh, then install without recommended packages",
            Operation::Reinstall => "refresh, then reinstall packages",
            Operation::Remove => "remove packages",
            Operation::Autoremove => "remove automatically installed packages no longer needed",
            Operation::Mark => "run apt-mark",
            Operation::Search => "search package names",
            Operation::Help => "show this help",
            Operation::Passthrough => "pass anything else straight to apt",
        }
    }
}

pub struct AliasEntry {
    pub name: &'static str,
    pub operation: Operation,
    /// Lines printed to stderr before the operation runs.
    pub notice: &'static [&'static str],
}

const FULL_UPGRADE_NOTICE: &[&str] = &[
    "Note: 'aps upgrade' already runs a full-upgrade, which may remove packages (unlike 'apt upgrade').",
    "Note: use 'aps soft-upgrade' to upgrade without removing packages.",
];

const fn alias(name: &'static str, operation: Operation) -> AliasEntry {
    AliasEntry { name, operation, notice: &[] }
}

pub const ALIASES: &[AliasEntry] = &[
    alias("refresh", Operation::Refresh),
    alias("ref", Operation::Refresh),
    alias("upgrade", Operation::Upgrade),
    alias("up", Operation::Upgrade),
    AliasEntry {
        name: "full-upgrade",
        operation: Operation::Upgrade,
        notice: FULL_UPGRADE_NOTICE,
    },
    alias("soft-upgrade", Operation::SoftUpgrade),
    alias("sup", Operation::SoftUpgrade),
    alias("install", Operation::Install),
    alias("in", Operation::Install),
    alias("reinstall", Operation::Reinstall),
    alias("rein", Operation::Reinstall),
    alias("remove", Operation::Remove),
    alias("rm", Operation::Remove),
    alias("autoremove", Operation::Autoremove),
    alias("autorm", Operation::Autoremove),
    alias("mark", Operation::Mark),
    alias("search", Operation::Search),
    alias("se", Operation::Search),
];

pub fn lookup(token: &str) -> Option<&'static AliasEntry> {
    ALIASES.iter().find(|entry| entry.name == token)
}

/// One child process to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub tool: Tool,
    pub args: Vec<String>,
    pub elevated: bool,
}

impl Invocation {
    fn new(operation: Operation, forwarded: &[String]) -> Self {
        let mut args: Vec<String> = operation.prefix().iter().map(|s| s.to_string()).collect();
        args.extend(forwarded.iter().cloned());
        Self {
            tool: operation.tool(),
            args,
            elevated: operation.elevated(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Plan {
    Help,
    /// Each step runs only if the one before it exited 0.
    Run {
        operation: Operation,
        notice: &'static [&'static str],
        steps: Vec<Invocation>,
    },
}

/// Resolve the caller's tokens into the commands to run.
pub fn plan(tokens: &[String]) -> Plan {
    let (first, rest) = match tokens {
        [] => return Plan::Help,
        [only] if only == "help" => return Plan::Help,
        [first, rest @ ..] => (first, rest),
    };

    let Some(entry) = lookup(first) else {
        return Plan::Run {
            operation: Operation::Passthrough,
            notice: &[],
            steps: vec![Invocation::new(Operation::Passthrough, tokens)],
        };
    };

    let operation = entry.operation;
    let mut steps = Vec::with_capacity(2);
    if operation.needs_refresh() {
        steps.push(Invocation::new(Operation::Refresh, &[]));
    }
    steps.push(Invocation::new(operation, rest));

    Plan::Run {
        operation,
        notice: entry.notice,
        steps,
    }
}

/// Usage text built from the alias table.
pub fn help_text() -> String {
    let mut text = String::from("Usage: aps <command> [args...]\n\nCommands:\n");

    let mut seen: Vec<Operation> = Vec::new();
    for entry in ALIASES {
        if seen.contains(&entry.operation) {
            continue;
        }
        seen.push(entry.operation);

        let names: Vec<&str> = ALIASES
            .iter()
            .filter(|e| e.operation == entry.operation)
            .map(|e| e.name)
            .collect();
        text.push_str(&format!("  {:<32} {}\n", names.join(", "), entry.operation.summary()));
    }

    text.push_str(&format!("  {:<32} {}\n", "help", Operation::Help.summary()));
    text.push_str(&format!("  {:<32} {}\n", "<anything else>", Operation::Passthrough.summary()));
    text.push_str("\nOptions (before the command):\n");
    text.push_str("  --apt-path <PATH>                apt executable [env: APS_APT]\n");
    text.push_str("  --apt-mark-path <PATH>           apt-mark executable [env: APS_APT_MARK]\n");
    text.push_str("  --sudo-path <PATH>               elevation wrapper [env: APS_SUDO]\n");
    text.push_str("  --dry-run                        print commands instead of running them\n");
    text
}
