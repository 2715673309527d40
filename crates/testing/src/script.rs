// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Transcript tests.
//!
//! A script is a sequence of steps. A step starts with a `> ` line holding
//! one line of client input; the lines after it, up to the next blank line
//! or step, are the expected client output without the timing line.
//! Lines starting with `#` are comments, except `# parties: N` which sets the
//! cluster size (2 by default).

use std::fmt::Write;

use tracing::debug;

use crate::cluster;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
	/// 1-based line of the `> ` command in the script.
	pub line: usize,
	pub command: String,
	pub expected: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
	pub name: String,
	pub parties: usize,
	pub steps: Vec<Step>,
}

impl Script {
	pub fn parse(name: &str, text: &str) -> Self {
		let mut parties = 2;
		let mut steps: Vec<Step> = Vec::new();
		let mut open = false;

		for (idx, raw) in text.lines().enumerate() {
			let line = raw.trim_end_matches('\r');

			if let Some(comment) = line.strip_prefix('#') {
				if let Some(count) = comment.trim().strip_prefix("parties:") {
					parties = count.trim().parse().unwrap_or_else(|_| panic!("{}:{}: bad party count", name, idx + 1));
				}
				continue;
			}

			if let Some(command) = line.strip_prefix("> ") {
				steps.push(Step {
					line: idx + 1,
					command: command.to_string(),
					expected: Vec::new(),
				});
				open = true;
				continue;
			}

			if line.trim().is_empty() {
				open = false;
				continue;
			}

			match steps.last_mut() {
				Some(step) if open => step.expected.push(line.to_string()),
				_ => panic!("{}:{}: output line outside of a step", name, idx + 1),
			}
		}

		Self {
			name: name.to_string(),
			parties,
			steps,
		}
	}

	/// Runs every step on a fresh cluster and panics with a report of all
	/// steps whose output differed.
	pub fn run(&self) {
		let mut cluster = cluster(self.parties);
		let mut report = String::new();

		for step in &self.steps {
			debug!(script = %self.name, line = step.line, command = %step.command, "step");
			let response = cluster.execute(&step.command);
			let actual: Vec<String> = response.body().lines().map(str::to_string).collect();
			if actual != step.expected {
				let _ = writeln!(report, "{}:{}: > {}", self.name, step.line, step.command);
				let _ = writeln!(report, "  expected:");
				for line in &step.expected {
					let _ = writeln!(report, "    |{}", line);
				}
				let _ = writeln!(report, "  actual:");
				for line in &actual {
					let _ = writeln!(report, "    |{}", line);
				}
			}
		}

		cluster.shutdown();
		assert!(report.is_empty(), "script `{}` failed\n{}", self.name, report);
	}
}

pub fn run(name: &str, text: &str) {
	Script::parse(name, text).run();
}
