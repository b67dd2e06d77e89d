use clap::{Args, Subcommand};

use droidkit::defaults;
use droidkit::snippets;
use droidkit::validation;

use super::{CmdResult, CodeOutput};

#[derive(Args)]
pub struct GenArgs {
    #[command(subcommand)]
    command: GenCommand,

    /// Print a JSON envelope instead of raw code
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
enum GenCommand {
    /// Toast showing a string resource
    Toast {
        /// String resource id (R.string.<id>)
        string_id: String,
    },
    /// Guard that toasts `<name>_error` and returns when a value is zero
    ZeroCheck {
        /// Comma-separated Java field names
        names: String,
    },
    /// Switch cases copying a serializable intent extra into fields
    IntentCase {
        /// Intent variable name
        intent: String,
        /// Comma-separated case labels (snake_case field names)
        names: String,
        /// Extra key (default from droidkit.json, built-in "dimension")
        #[arg(long)]
        extra: Option<String>,
        /// Cast type for the extra (default from droidkit.json, built-in "Dimension")
        #[arg(long = "type")]
        value_type: Option<String>,
    },
    /// Restore fields from the saved instance bundle
    Bundle {
        /// Cast type of the restored values
        value_type: String,
        /// Comma-separated field names
        names: String,
        /// Bundle variable (default from droidkit.json, built-in "savedInstanceState")
        #[arg(long)]
        bundle: Option<String>,
    },
    /// Attach `<element>Listener` to each element
    Listener {
        /// Listener kind, appended to `setOn` (e.g. ClickListener)
        listener: String,
        /// Comma-separated view field names
        elements: String,
    },
}

pub fn run(args: GenArgs, _global: &super::GlobalArgs) -> CmdResult<CodeOutput> {
    let mut config = defaults::load_config().defaults.snippets;

    match args.command {
        GenCommand::Toast { string_id } => {
            let id = validation::require_non_empty(
                &string_id,
                "string_id",
                "String id cannot be empty",
            )?;
            Ok((
                CodeOutput::new("gen.toast", vec![snippets::toast(id, &config)]),
                0,
            ))
        }
        GenCommand::ZeroCheck { names } => {
            let names = validation::require_list(&names, "names")?;
            Ok((
                CodeOutput::new(
                    "gen.zero_check",
                    render_each(&names, |n| snippets::zero_check(n, &config)),
                ),
                0,
            ))
        }
        GenCommand::IntentCase {
            intent,
            names,
            extra,
            value_type,
        } => {
            let intent =
                validation::require_non_empty(&intent, "intent", "Intent name cannot be empty")?;
            let names = validation::require_list(&names, "names")?;
            apply_override(&mut config.intent_extra, extra);
            apply_override(&mut config.intent_value_type, value_type);
            Ok((
                CodeOutput::new(
                    "gen.intent_case",
                    render_each(&names, |n| snippets::intent_case(intent, n, &config)),
                ),
                0,
            ))
        }
        GenCommand::Bundle {
            value_type,
            names,
            bundle,
        } => {
            let value_type =
                validation::require_non_empty(&value_type, "value_type", "Type cannot be empty")?;
            let names = validation::require_list(&names, "names")?;
            apply_override(&mut config.bundle, bundle);
            Ok((
                CodeOutput::new(
                    "gen.bundle",
                    render_each(&names, |n| snippets::bundle_restore(value_type, n, &config)),
                ),
                0,
            ))
        }
        GenCommand::Listener { listener, elements } => {
            let listener =
                validation::require_non_empty(&listener, "listener", "Listener cannot be empty")?;
            let elements = validation::require_list(&elements, "elements")?;
            Ok((
                CodeOutput::new(
                    "gen.listener",
                    render_each(&elements, |e| snippets::set_listener(listener, e)),
                ),
                0,
            ))
        }
    }
}

fn render_each<F>(names: &[String], render: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    names.iter().map(|n| render(n)).collect()
}

fn apply_override(slot: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use droidkit::snippets::SnippetDefaults;

    #[test]
    fn apply_override_ignores_blank_values() {
        let mut slot = SnippetDefaults::default().bundle;
        apply_override(&mut slot, Some("  ".to_string()));
        assert_eq!(slot, "savedInstanceState");

        apply_override(&mut slot, Some("state".to_string()));
        assert_eq!(slot, "state");
    }

    #[test]
    fn render_each_keeps_order() {
        let names = vec!["a".to_string(), "b".to_string()];
        assert_eq!(render_each(&names, |n| n.to_uppercase()), vec!["A", "B"]);
    }
}
