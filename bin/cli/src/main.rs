// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Starts a client and its compute parties in one process and reads commands
//! line by line, either interactively or from a file.

#![cfg_attr(not(debug_assertions), deny(warnings))]

use std::{
	fs::File,
	io::{self, BufRead, BufReader, Write},
	path::PathBuf,
	process::ExitCode,
};

use clap::Parser;
use mpcdb_engine::{Cluster, ClusterConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mpcdb", version, about = "Relational store over secret-shared data")]
struct Args {
	/// Number of compute parties
	#[arg(short = 'n', long, default_value_t = 2, env = "MPCDB_PARTIES")]
	parties: usize,

	/// Seed of the stream the parties re-share from
	#[arg(short = 's', long, env = "MPCDB_SEED")]
	seed: Option<u64>,

	/// Read commands from a file instead of stdin
	#[arg(short = 'f', long, value_name = "FILE")]
	file: Option<PathBuf>,

	/// Log filter, e.g. `info` or `mpcdb_engine=debug`
	#[arg(long, default_value = "warn", env = "MPCDB_LOG")]
	log_level: String,

	/// Emit logs as JSON lines
	#[arg(long)]
	log_json: bool,
}

fn init_logging(args: &Args) {
	let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
	let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr);
	if args.log_json {
		builder.json().init();
	} else {
		builder.init();
	}
}

fn main() -> ExitCode {
	let args = Args::parse();
	init_logging(&args);

	let mut config = ClusterConfig::new().parties(args.parties);
	if let Some(seed) = args.seed {
		config = config.seed(seed);
	}

	let mut cluster = match Cluster::start(config) {
		Ok(cluster) => cluster,
		Err(err) => {
			eprintln!("{}", err);
			return ExitCode::FAILURE;
		}
	};
	info!(parties = args.parties, "cluster ready");

	let interactive = args.file.is_none();
	let input: Box<dyn BufRead> = match &args.file {
		Some(path) => match File::open(path) {
			Ok(file) => Box::new(BufReader::new(file)),
			Err(err) => {
				error!(path = %path.display(), %err, "cannot open command file");
				eprintln!("cannot open {}: {}", path.display(), err);
				return ExitCode::FAILURE;
			}
		},
		None => Box::new(BufReader::new(io::stdin())),
	};

	if let Err(err) = repl(&mut cluster, input, interactive) {
		eprintln!("{}", err);
		return ExitCode::FAILURE;
	}

	cluster.shutdown();
	ExitCode::SUCCESS
}

fn repl(cluster: &mut Cluster, input: Box<dyn BufRead>, interactive: bool) -> io::Result<()> {
	let mut stdout = io::stdout();
	prompt(&mut stdout, interactive)?;

	for line in input.lines() {
		let line = line?;
		let command = line.trim();
		if command.is_empty() || command.starts_with("--") {
			prompt(&mut stdout, interactive)?;
			continue;
		}

		let response = cluster.execute(command);
		writeln!(stdout, "{}", response)?;
		if cluster.is_closed() {
			return Ok(());
		}
		prompt(&mut stdout, interactive)?;
	}
	Ok(())
}

fn prompt(stdout: &mut io::Stdout, interactive: bool) -> io::Result<()> {
	if interactive {
		write!(stdout, "mpcdb> ")?;
		stdout.flush()?;
	}
	Ok(())
}
