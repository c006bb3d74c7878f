//! Line classification and the toggle marker

use promptlist::checklist::line::{self, LineKind};
use promptlist::checklist::transform::{display_text, toggle_line};
use rstest::rstest;

#[rstest]
#[case("", LineKind::Empty)]
#[case(" \t ", LineKind::Empty)]
#[case("# caption", LineKind::DescriptionComment)]
#[case("   #caption", LineKind::DescriptionComment)]
#[case("// off", LineKind::ToggleComment)]
#[case("  //off", LineKind::ToggleComment)]
#[case("on", LineKind::Phrase)]
#[case("on // note", LineKind::Phrase)]
#[case("/ not a toggle", LineKind::Phrase)]
#[case("(cat:1.2) [A],", LineKind::Phrase)]
fn classifies_lines(#[case] text: &str, #[case] expected: LineKind) {
    assert_eq!(line::classify(text), expected);
}

#[rstest]
#[case("cat")]
#[case("// cat")]
#[case("  (cat:1.5) [Animals],")]
#[case("//(dog:0.4) [A] [B]")]
#[case("# caption")]
#[case("")]
fn double_toggle_keeps_kind_and_display(#[case] text: &str) {
    let twice = line::toggle(&line::toggle(text));
    assert_eq!(line::classify(&twice), line::classify(text));
    assert_eq!(display_text(&twice), display_text(text));
}

#[test]
fn toggle_line_activates_a_comment() {
    assert_eq!(
        toggle_line("apple\n// banana\ncherry", 1),
        "apple\nbanana\ncherry"
    );
}

#[test]
fn toggle_line_keeps_trailing_newline() {
    assert_eq!(toggle_line("a\nb\n", 0), "// a\nb\n");
}

#[test]
fn toggle_line_out_of_range_is_a_no_op() {
    let doc = "apple\nbanana";
    assert_eq!(toggle_line(doc, 2), doc);
    assert_eq!(toggle_line(doc, usize::MAX), doc);
}

#[test]
fn description_marker_is_stripped() {
    assert_eq!(line::strip_description_marker("  ##  lighting"), "#  lighting");
    assert_eq!(line::strip_description_marker("# soft light"), "soft light");
}
