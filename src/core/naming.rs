//! Java ⇄ XML identifier conversion and view binding generation.
//!
//! Java fields are camelCase (`saveButton`), Android resource ids are
//! snake_case (`save_button`). The last id segment names the widget class.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

fn case_boundary() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"([a-z])([A-Z])").expect("Invalid regex pattern"))
}

/// `saveButton` → `save_button`.
pub fn to_xml(java: &str) -> String {
    case_boundary()
        .replace_all(java, "${1}_${2}")
        .to_lowercase()
}

/// `save_button` → `saveButton`.
pub fn to_java(xml: &str) -> String {
    let mut segments = xml.split('_');
    let mut out = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        out.push_str(&capitalize(segment));
    }
    out
}

/// Upper-case the first letter, lower-case the rest.
///
/// Every other character is kept as-is, punctuation included.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Widget class implied by a field name's last word.
pub fn view_type(java: &str) -> String {
    let xml = to_xml(java);
    let last = xml.rsplit('_').next().unwrap_or_default();
    match capitalize(last).as_str() {
        "Box" => "CheckBox".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewBinding {
    pub field: String,
    pub view_type: String,
    pub id: String,
}

impl ViewBinding {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
            view_type: view_type(field),
            id: to_xml(field),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{} = ({}) findViewById(R.id.{});",
            self.field, self.view_type, self.id
        )
    }
}

pub fn find_view_bindings(fields: &[String]) -> Vec<ViewBinding> {
    fields.iter().map(|f| ViewBinding::new(f)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_xml_splits_camel_case() {
        assert_eq!(to_xml("saveButton"), "save_button");
        assert_eq!(to_xml("myCheckBox"), "my_check_box");
        assert_eq!(to_xml("width"), "width");
    }

    #[test]
    fn to_xml_only_splits_lower_to_upper() {
        assert_eq!(to_xml("HTTPServer"), "httpserver");
        assert_eq!(to_xml("item2Label"), "item2label");
    }

    #[test]
    fn to_java_capitalizes_later_segments() {
        assert_eq!(to_java("save_button"), "saveButton");
        assert_eq!(to_java("my_check_box"), "myCheckBox");
        assert_eq!(to_java("width"), "width");
    }

    #[test]
    fn to_java_lowercases_segment_tails() {
        assert_eq!(to_java("stud_WALL"), "studWall");
    }

    #[test]
    fn to_java_keeps_punctuation_inside_segments() {
        assert_eq!(to_java("door_x-y"), "doorX-y");
        assert_eq!(to_java("a_b.c"), "aB.c");
        assert_eq!(to_java("rope_mcDonald"), "ropeMcdonald");
    }

    #[test]
    fn view_type_keeps_punctuation() {
        assert_eq!(view_type("door_x-y"), "X-y");
    }

    #[test]
    fn to_java_capitalizes_repeated_first_word() {
        assert_eq!(to_java("rope_length_rope"), "ropeLengthRope");
    }

    #[test]
    fn to_java_drops_empty_segments() {
        assert_eq!(to_java("door__frame"), "doorFrame");
        assert_eq!(to_java(""), "");
    }

    #[test]
    fn view_type_uses_last_word() {
        assert_eq!(view_type("heightEdit"), "Edit");
        assert_eq!(view_type("saveButton"), "Button");
        assert_eq!(view_type("studsCheckBox"), "CheckBox");
    }

    #[test]
    fn binding_renders_find_view_by_id() {
        assert_eq!(
            ViewBinding::new("saveButton").render(),
            "saveButton = (Button) findViewById(R.id.save_button);"
        );
        assert_eq!(
            ViewBinding::new("headerCheckBox").render(),
            "headerCheckBox = (CheckBox) findViewById(R.id.header_check_box);"
        );
    }

    #[test]
    fn find_view_bindings_keeps_order() {
        let fields = vec!["aText".to_string(), "bSpinner".to_string()];
        let ids: Vec<String> = find_view_bindings(&fields)
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec!["a_text", "b_spinner"]);
    }
}
