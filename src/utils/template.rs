//! String template rendering utilities.

use regex::{Captures, Regex};
use std::sync::OnceLock;

pub struct TemplateVars;

impl TemplateVars {
    pub const NAME: &'static str = "name";
    pub const FIELD: &'static str = "field";
    pub const CONTEXT: &'static str = "context";
    pub const STRING_ID: &'static str = "stringId";
    pub const TOAST: &'static str = "toast";
    pub const TOAST_LENGTH: &'static str = "toastLength";
    pub const VALUE_TYPE: &'static str = "valueType";
    pub const INTENT: &'static str = "intent";
    pub const EXTRA: &'static str = "extra";
    pub const BUNDLE: &'static str = "bundle";
    pub const ELEMENT: &'static str = "element";
    pub const LISTENER: &'static str = "listener";
}

fn placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{\{(\w+)\}\}").expect("Invalid regex pattern"))
}

/// Substitute `{{key}}` placeholders in one pass.
///
/// Substituted values are never rescanned. Unknown keys are left in place.
pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    placeholder()
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            variables
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
