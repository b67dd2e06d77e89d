use clap::{Parser, Subcommand};

use commands::GlobalArgs;

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Raw,
}

mod commands;
mod output;

use commands::{comments, config, generate, name};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "droidkit")]
#[command(version = VERSION)]
#[command(about = "Android boilerplate generators and Java comment reflow")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reformat source comments
    Comments(comments::CommentsArgs),
    /// Convert between Java field names and XML resource names
    Name(name::NameArgs),
    /// Generate Android Java snippets
    Gen(generate::GenArgs),
    /// Manage global droidkit configuration
    Config(config::ConfigArgs),
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        Commands::Comments(args) if comments::is_raw(args) => ResponseMode::Raw,
        Commands::Name(args) if !args.json => ResponseMode::Raw,
        Commands::Gen(args) if !args.json => ResponseMode::Raw,
        _ => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    match response_mode(&cli.command) {
        ResponseMode::Raw => match commands::run_raw(cli.command, &global) {
            Ok((content, exit_code)) => {
                if output::print_raw(&content).is_err() {
                    return std::process::ExitCode::FAILURE;
                }
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
            Err(err) => {
                let exit_code = output::exit_code_for_error(err.code);
                if output::print_error(&err).is_err() {
                    return std::process::ExitCode::FAILURE;
                }
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
        },
        ResponseMode::Json => {
            let (json_result, exit_code) = commands::run_json(cli.command, &global);
            if output::print_json_result(json_result).is_err() {
                return std::process::ExitCode::FAILURE;
            }
            std::process::ExitCode::from(exit_code_to_u8(exit_code))
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
