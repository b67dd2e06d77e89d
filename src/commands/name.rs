use clap::{Args, Subcommand};

use droidkit::naming;
use droidkit::validation;

use super::{CmdResult, CodeOutput};

#[derive(Args)]
pub struct NameArgs {
    #[command(subcommand)]
    command: NameCommand,

    /// Print a JSON envelope instead of raw code
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
enum NameCommand {
    /// Convert an XML resource name to a Java field name (save_button → saveButton)
    Java {
        /// snake_case resource name
        name: String,
    },
    /// Convert a Java field name to an XML resource name (saveButton → save_button)
    Xml {
        /// camelCase field name
        name: String,
    },
    /// Generate findViewById bindings for Java field names
    Bind {
        /// Comma-separated field names (e.g. saveButton,widthEdit)
        names: String,
    },
}

pub fn run(args: NameArgs, _global: &super::GlobalArgs) -> CmdResult<CodeOutput> {
    match args.command {
        NameCommand::Java { name } => {
            let name = validation::require_non_empty(&name, "name", "Name cannot be empty")?;
            Ok((CodeOutput::new("name.java", vec![naming::to_java(name)]), 0))
        }
        NameCommand::Xml { name } => {
            let name = validation::require_non_empty(&name, "name", "Name cannot be empty")?;
            Ok((CodeOutput::new("name.xml", vec![naming::to_xml(name)]), 0))
        }
        NameCommand::Bind { names } => {
            let fields = validation::require_list(&names, "names")?;
            let bindings = naming::find_view_bindings(&fields);
            let mut output = CodeOutput::new(
                "name.bind",
                bindings.iter().map(|b| b.render()).collect(),
            );
            output.bindings = bindings;
            Ok((output, 0))
        }
    }
}
