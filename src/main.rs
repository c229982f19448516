//! `tkb-link`: link teaching-schedule rows to their original TKB documents.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use tkb_link_lib::commands::link::link_cmds;
use tkb_link_lib::services::config;
use tkb_link_lib::services::matcher::MatchResult;

/// Command-line arguments for tkb-link
#[derive(Parser, Debug)]
#[command(name = "tkb-link")]
#[command(about = "Link teaching-schedule rows to their original TKB documents")]
#[command(version)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true, env = "TKB_LINK_CONFIG")]
    config: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the document for one class
    Match(MatchArgs),
    /// Show the keywords extracted from a class name
    Keywords {
        /// Class name as written in the schedule
        class_name: String,
    },
    /// Link every row of a JSON schedule export
    Link(LinkArgs),
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Directory holding the TKB documents
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Class code (Mã lớp)
    #[arg(long)]
    code: Option<String>,

    /// Class name (Tên lớp)
    #[arg(long)]
    name: Option<String>,
}

#[derive(Args, Debug)]
struct LinkArgs {
    /// JSON array of schedule rows
    #[arg(short, long)]
    rows: PathBuf,

    /// Directory holding the TKB documents (defaults to the rows file's folder)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Match rows in parallel
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv(); // Try to load .env, ignore if missing

    let cli = Cli::parse();
    tkb_link_lib::init_logging(cli.verbose);

    let config = config::load_config(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Command::Match(args) => {
            let dir = link_cmds::resolve_schedule_dir(args.dir.as_deref(), &config, None);
            let result =
                link_cmds::match_file_cmd(&dir, args.code.as_deref(), args.name.as_deref())
                    .context("Failed to search for the document")?;
            match result {
                MatchResult::Matched(file) => println!("{}", file.path.display()),
                MatchResult::NotFound => println!("not found"),
            }
        }
        Command::Keywords { class_name } => {
            for keyword in link_cmds::keywords_cmd(&class_name) {
                println!("{keyword}");
            }
        }
        Command::Link(args) => {
            let dir =
                link_cmds::resolve_schedule_dir(args.dir.as_deref(), &config, Some(&args.rows));
            let report = link_cmds::link_rows_cmd(&args.rows, &dir, &config, args.parallel)
                .with_context(|| format!("Failed to link rows from {}", args.rows.display()))?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", link_cmds::format_summary(&report));
            }
        }
    }

    Ok(())
}
