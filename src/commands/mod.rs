use droidkit::naming::ViewBinding;
use serde::Serialize;

pub type CmdResult<T> = droidkit::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

/// Generated code returned by `name` and `gen` commands.
///
/// Raw mode prints one snippet per line; JSON mode serializes the struct.
#[derive(Debug, Serialize)]
pub struct CodeOutput {
    pub command: String,
    pub snippets: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bindings: Vec<ViewBinding>,
}

impl CodeOutput {
    pub fn new(command: &str, snippets: Vec<String>) -> Self {
        Self {
            command: command.to_string(),
            snippets,
            bindings: Vec::new(),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for snippet in &self.snippets {
            out.push_str(snippet);
            out.push('\n');
        }
        out
    }
}

pub mod comments;
pub mod config;
pub mod generate;
pub mod name;

pub(crate) fn run_raw(
    command: crate::Commands,
    global: &GlobalArgs,
) -> droidkit::Result<(String, i32)> {
    match command {
        crate::Commands::Comments(args) => comments::run_raw(args, global),
        crate::Commands::Name(args) => {
            name::run(args, global).map(|(output, code)| (output.to_text(), code))
        }
        crate::Commands::Gen(args) => {
            generate::run(args, global).map(|(output, code)| (output.to_text(), code))
        }
        _ => Err(droidkit::Error::validation_invalid_argument(
            "output_mode",
            "Command does not support raw output",
            None,
            None,
        )),
    }
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (droidkit::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Comments(args) => dispatch!(args, global, comments),
        crate::Commands::Name(args) => dispatch!(args, global, name),
        crate::Commands::Gen(args) => dispatch!(args, global, generate),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
