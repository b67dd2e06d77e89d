use droidkit::comments::{reflow_lines, reflow_text, wrap, ReflowConfig};

fn config(width: usize) -> ReflowConfig {
    ReflowConfig::new(width).unwrap()
}

fn body_lines(lines: &[String]) -> Vec<&String> {
    lines
        .iter()
        .filter(|l| l.trim_start().starts_with("* ") || l.trim() == "*")
        .collect()
}

#[test]
fn trailing_comment_scenario() {
    let out = reflow_lines(
        &["int x = 1; // setup", "// continued", "// end", "doSomething();"],
        &config(80),
    )
    .unwrap();

    assert_eq!(
        out.lines,
        vec!["int x = 1; ", "/*", "* setup continued end", "*/", "doSomething();"]
    );
}

#[test]
fn lone_comment_is_emitted_unchanged() {
    let out = reflow_lines(&["// only one line"], &config(80)).unwrap();
    assert_eq!(out.lines, vec!["// only one line"]);
    assert!(!out.changed());
}

#[test]
fn plain_code_passes_through_in_order() {
    let input = [
        "public class Rope {",
        "    private int length;",
        "    int a = b / c;",
        "}",
    ];
    let out = reflow_lines(&input, &config(80)).unwrap();
    assert_eq!(out.lines, input.to_vec());
}

#[test]
fn long_run_wraps_within_width_without_splitting_words() {
    let words = "the stair calculator divides the total rise by the preferred riser height \
                 and rounds to the nearest whole number of steps before computing the run";
    let input: Vec<String> = words
        .split(' ')
        .collect::<Vec<_>>()
        .chunks(4)
        .map(|c| format!("        // {}", c.join(" ")))
        .collect();

    let out = reflow_lines(&input, &config(80)).unwrap();
    let body = body_lines(&out.lines);

    assert!(body.len() > 1);
    for line in &body {
        assert!(line.chars().count() <= 80, "too wide: {:?}", line);
        assert!(line.starts_with("        * "));
    }

    let rejoined: Vec<&str> = body
        .iter()
        .flat_map(|l| l.trim_start().trim_start_matches("* ").split(' '))
        .collect();
    let original: Vec<&str> = words.split_whitespace().collect();
    assert_eq!(rejoined, original);
}

#[test]
fn over_long_word_sits_alone() {
    let long = "x".repeat(30);
    let input = vec!["// short".to_string(), format!("// {} tail", long)];

    let out = reflow_lines(&input, &config(20)).unwrap();

    assert_eq!(
        out.lines,
        vec![
            "/*".to_string(),
            "* short".to_string(),
            format!("* {}", long),
            "* tail".to_string(),
            "*/".to_string(),
        ]
    );
}

#[test]
fn reflow_is_idempotent() {
    let text = "void a() {\n    b(); // first\n    // second\n    // third\n}\n";
    let once = reflow_text(text, &config(80)).unwrap();
    let twice = reflow_text(&once.text, &config(80)).unwrap();

    assert_eq!(once.blocks.len(), 1);
    assert_eq!(twice.text, once.text);
    assert!(twice.blocks.is_empty());
}

#[test]
fn tabs_in_indentation_are_copied_verbatim() {
    let out = reflow_lines(&["\t\t// a", "\t \t// b"], &config(80)).unwrap();
    assert_eq!(out.lines, vec!["\t \t/*", "\t \t* a b", "\t \t*/"]);
}

#[test]
fn wrap_helper_matches_block_wrapping() {
    assert_eq!(
        wrap::wrap("one two three", 7),
        vec!["one two".to_string(), "three".to_string()]
    );
}
