//! Line-indexed weight edits and display text

use promptlist::checklist::transform::{adjust_line_weight, display_text};
use rstest::rstest;

#[rstest]
#[case("(cat:1.5)", -0.1, "(cat:1.4)")]
#[case("(cat:1.5)", 0.6, "(cat:1.5)")]
#[case("// cat", 0.1, "// (cat:1.1)")]
#[case("//cat", 0.1, "//(cat:1.1)")]
#[case("// (cat:1.1),", -0.1, "// cat")]
#[case("cat // note", 0.1, "(cat:1.1) // note")]
#[case("(cat:1.4) [A],   // keep (this:0.3)", 0.1, "(cat [A]:1.5)   // keep (this:0.3)")]
#[case("// cat // note", 0.2, "// (cat:1.2) // note")]
#[case("//", 0.1, "//")]
#[case("// ", -0.1, "// ")]
#[case("# caption", 0.1, "# caption")]
#[case("", 0.1, "")]
fn adjusts_single_line(#[case] line: &str, #[case] delta: f64, #[case] expected: &str) {
    assert_eq!(adjust_line_weight(line, 0, delta), expected);
}

#[test]
fn adjusts_only_the_indexed_line() {
    let doc = "a\n(b:1.5)\nc";
    assert_eq!(adjust_line_weight(doc, 1, 0.1), "a\n(b:1.6)\nc");
    assert_eq!(adjust_line_weight(doc, 3, 0.1), doc);
}

#[test]
fn weight_survives_a_toggle_round_trip() {
    let doc = "(cat:1.3) [A]";
    let off = promptlist::toggle_line(doc, 0);
    let heavier = adjust_line_weight(&off, 0, 0.1);
    assert_eq!(heavier, "// (cat [A]:1.4)");
    assert_eq!(promptlist::toggle_line(&heavier, 0), "(cat [A]:1.4)");
}

#[rstest]
#[case("cat", "cat")]
#[case("// cat", "cat")]
#[case("  //   (cat:1.5) [Animals],", "cat")]
#[case("(a:1.2), (b:0.8)", "a, b")]
#[case(r"\[framed\] portrait [Style]", "[framed] portrait")]
#[case("cat , ", "cat")]
#[case("cat // note", "cat // note")]
#[case("", "")]
fn renders_display_text(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(display_text(line), expected);
}
