//! nodelink - node-link graph inspection tool
//!
//! Validates, summarizes and normalizes node-link graph JSON files.
//!
//! # Usage
//!
//! ```bash
//! nodelink validate graph.json --deny-self-loops
//! nodelink summary graph.json
//! nodelink format graph.json -o normalized.json --compact
//! ```

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use log::{debug, info, LevelFilter};
use nodelink::{
    codec,
    config::AppConfig,
    error::Result,
    graph::{find_issues, GraphSummary},
};

/// Node-link graph inspection tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a graph file and report every problem
    Validate {
        /// Path to the graph file (.json)
        #[arg(value_name = "GRAPH_FILE")]
        file: PathBuf,

        /// Reject links whose source equals their target
        #[arg(long)]
        deny_self_loops: bool,

        /// Reject nodes that share a name
        #[arg(long)]
        unique_names: bool,
    },

    /// Print node, link, group and type counts
    Summary {
        /// Path to the graph file (.json)
        #[arg(value_name = "GRAPH_FILE")]
        file: PathBuf,
    },

    /// Re-encode a graph file canonically
    Format {
        /// Path to the graph file (.json)
        #[arg(value_name = "GRAPH_FILE")]
        file: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Write compact JSON regardless of configuration
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!("Parsed arguments: {:?}", args);

    match run(&args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

/// Execute the selected command; `Ok(false)` means the graph was rejected.
fn run(args: &Args) -> Result<bool> {
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match &args.command {
        Command::Validate {
            file,
            deny_self_loops,
            unique_names,
        } => {
            let mut rules = config.validation.clone();
            if *deny_self_loops {
                rules = rules.with_self_loops(false);
            }
            if *unique_names {
                rules = rules.with_duplicate_names(false);
            }

            let graph = codec::parse_file(file)?;
            let issues = find_issues(&graph, &rules);
            for issue in &issues {
                println!("{}: {issue}", file.display());
            }
            info!(
                "{}: {} nodes, {} links, {} issues",
                file.display(),
                graph.node_count(),
                graph.link_count(),
                issues.len()
            );
            if issues.is_empty() {
                println!("{}: ok", file.display());
            }
            Ok(issues.is_empty())
        }
        Command::Summary { file } => {
            let graph = codec::parse_file(file)?;
            print!("{}", GraphSummary::of(&graph));
            Ok(true)
        }
        Command::Format {
            file,
            output,
            compact,
        } => {
            let graph = codec::parse_file(file)?;
            let pretty = config.output.pretty && !compact;
            match output {
                Some(out) => {
                    codec::write_file(&graph, out, pretty)?;
                    info!("Wrote {}", out.display());
                }
                None if pretty => println!("{}", codec::to_json_pretty(&graph)?),
                None => println!("{}", codec::to_json(&graph)?),
            }
            Ok(true)
        }
    }
}
