use clap::{Args, Subcommand};
use serde::Serialize;

use droidkit::comments::{self, FormatReport, FormatTarget, ReflowConfig};
use droidkit::defaults;

use super::CmdResult;

#[derive(Args)]
pub struct CommentsArgs {
    #[command(subcommand)]
    command: CommentsCommand,
}

#[derive(Subcommand)]
enum CommentsCommand {
    /// Merge runs of `//` comments into wrapped `/* */` blocks
    Format {
        /// Source file to reformat
        input: String,
        /// File to write (default: rewrite the input in place)
        output: Option<String>,
        /// Maximum line width (default from droidkit.json, built-in 80)
        #[arg(short, long)]
        width: Option<usize>,
        /// Report merged blocks without writing; exits 1 when anything would change
        #[arg(long, conflicts_with_all = ["output", "stdout"])]
        check: bool,
        /// Print the reformatted source instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
}

#[derive(Debug, Serialize)]
pub struct CommentsOutput {
    pub command: String,
    pub check: bool,
    #[serde(flatten)]
    pub report: FormatReport,
}

/// True when the command prints source text rather than a JSON report.
pub fn is_raw(args: &CommentsArgs) -> bool {
    match &args.command {
        CommentsCommand::Format { stdout, .. } => *stdout,
    }
}

fn resolve_config(width: Option<usize>) -> droidkit::Result<ReflowConfig> {
    match width {
        Some(width) => ReflowConfig::new(width),
        None => Ok(defaults::load_config().defaults.comments),
    }
}

fn format_target(output: Option<String>, check: bool, stdout: bool) -> FormatTarget {
    match output {
        _ if check || stdout => FormatTarget::Memory,
        Some(path) => FormatTarget::File(path),
        None => FormatTarget::InPlace,
    }
}

pub fn run(args: CommentsArgs, _global: &super::GlobalArgs) -> CmdResult<CommentsOutput> {
    match args.command {
        CommentsCommand::Format {
            input,
            output,
            width,
            check,
            stdout,
        } => {
            let config = resolve_config(width)?;
            let target = format_target(output, check, stdout);

            let report = comments::format_file(&input, target, &config)?;
            let exit_code = if check && report.blocks_merged > 0 { 1 } else { 0 };

            Ok((
                CommentsOutput {
                    command: "comments.format".to_string(),
                    check,
                    report,
                },
                exit_code,
            ))
        }
    }
}

pub fn run_raw(args: CommentsArgs, global: &super::GlobalArgs) -> droidkit::Result<(String, i32)> {
    let (output, exit_code) = run(args, global)?;
    Ok((output.report.content, exit_code))
}
