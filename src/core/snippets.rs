//! Android Java snippet generators.
//!
//! Each generator renders one template per name. Template text, including
//! the tab indentation, matches what gets pasted into activity code.

use serde::{Deserialize, Serialize};

use crate::naming;
use crate::utils::template::{self, TemplateVars};

const TOAST: &str =
    "Toast.makeText({{context}}, getString(R.string.{{stringId}}), {{toastLength}}).show();";

const ZERO_CHECK: &str = "if ({{name}}.equals(0)){\n\t{{toast}}\n\treturn;\n}";

const INTENT_CASE: &str = "case {{name}}:{\n\t{{field}}.setValue(({{valueType}}){{intent}}.getSerializableExtra(\"{{extra}}\"));\n\tbreak;\n}";

const BUNDLE_RESTORE: &str = "if ( {{bundle}}.getSerializable(\"{{name}}\") != null )\n\t{{name}} = ({{valueType}}) {{bundle}}.getSerializable(\"{{name}}\");";

const SET_LISTENER: &str = "{{element}}.setOn{{listener}}({{element}}Listener);";

/// Template values that can be overridden in droidkit.json.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetDefaults {
    #[serde(default = "default_context")]
    pub context: String,

    #[serde(default = "default_toast_length")]
    pub toast_length: String,

    #[serde(default = "default_bundle")]
    pub bundle: String,

    #[serde(default = "default_intent_extra")]
    pub intent_extra: String,

    #[serde(default = "default_intent_value_type")]
    pub intent_value_type: String,
}

impl Default for SnippetDefaults {
    fn default() -> Self {
        Self {
            context: default_context(),
            toast_length: default_toast_length(),
            bundle: default_bundle(),
            intent_extra: default_intent_extra(),
            intent_value_type: default_intent_value_type(),
        }
    }
}

fn default_context() -> String {
    "getBaseContext()".to_string()
}

fn default_toast_length() -> String {
    "Toast.LENGTH_SHORT".to_string()
}

fn default_bundle() -> String {
    "savedInstanceState".to_string()
}

fn default_intent_extra() -> String {
    "dimension".to_string()
}

fn default_intent_value_type() -> String {
    "Dimension".to_string()
}

/// `Toast.makeText(...)` for a string resource id.
pub fn toast(string_id: &str, defaults: &SnippetDefaults) -> String {
    template::render(
        TOAST,
        &[
            (TemplateVars::CONTEXT, defaults.context.as_str()),
            (TemplateVars::STRING_ID, string_id),
            (TemplateVars::TOAST_LENGTH, defaults.toast_length.as_str()),
        ],
    )
}

/// Guard that toasts `<xml_name>_error` and returns when `name` is zero.
pub fn zero_check(name: &str, defaults: &SnippetDefaults) -> String {
    let toast = toast(&format!("{}_error", naming::to_xml(name)), defaults);
    template::render(
        ZERO_CHECK,
        &[(TemplateVars::NAME, name), (TemplateVars::TOAST, toast.as_str())],
    )
}

/// `switch` case copying a serializable intent extra into the field for `name`.
pub fn intent_case(intent: &str, name: &str, defaults: &SnippetDefaults) -> String {
    let field = naming::to_java(name);
    template::render(
        INTENT_CASE,
        &[
            (TemplateVars::NAME, name),
            (TemplateVars::FIELD, field.as_str()),
            (TemplateVars::VALUE_TYPE, defaults.intent_value_type.as_str()),
            (TemplateVars::INTENT, intent),
            (TemplateVars::EXTRA, defaults.intent_extra.as_str()),
        ],
    )
}

/// Restore a field from the saved instance bundle when present.
pub fn bundle_restore(value_type: &str, name: &str, defaults: &SnippetDefaults) -> String {
    template::render(
        BUNDLE_RESTORE,
        &[
            (TemplateVars::BUNDLE, defaults.bundle.as_str()),
            (TemplateVars::NAME, name),
            (TemplateVars::VALUE_TYPE, value_type),
        ],
    )
}

/// `element.setOn<Listener>(elementListener);`
pub fn set_listener(listener: &str, element: &str) -> String {
    template::render(
        SET_LISTENER,
        &[
            (TemplateVars::ELEMENT, element),
            (TemplateVars::LISTENER, listener),
        ],
    )
}
