use extractor_engine::{plan_document, render_document, DocumentSpec, PAGE_BOTTOM_MM};
use pretty_assertions::assert_eq;

fn spec(summary: &str, key_points: &[&str]) -> DocumentSpec {
    DocumentSpec {
        title: "AI-powered Content Extractor".to_string(),
        summary: summary.to_string(),
        key_points: key_points.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn plan_follows_the_page_structure() {
    let ops = plan_document(&spec("Para one.\n\nPara two.", &["A", "B"]));
    let texts: Vec<&str> = ops.iter().map(|op| op.text.as_str()).collect();

    assert_eq!(
        texts,
        vec![
            "AI-powered Content Extractor",
            "Summary:",
            "Para one.",
            "Para two.",
            "Key Points:",
            "1. A",
            "2. B",
        ]
    );
    assert!(ops.iter().all(|op| op.page == 0));

    // The cursor only ever walks down the page.
    for pair in ops.windows(2) {
        assert!(pair[0].y_mm < pair[1].y_mm);
    }

    // Key points are numbered and indented past the body margin.
    let first_point = &ops[5];
    assert!(first_point.x_mm > ops[2].x_mm);
}

#[test]
fn long_documents_break_onto_new_pages() {
    let points: Vec<String> = (0..60).map(|i| format!("point {i}")).collect();
    let refs: Vec<&str> = points.iter().map(String::as_str).collect();
    let ops = plan_document(&spec("short summary", &refs));

    let last_page = ops.iter().map(|op| op.page).max().unwrap();
    assert!(last_page >= 1, "60 entries cannot fit one page");

    // No op is placed past the break threshold, and continuation pages
    // restart at the top margin.
    assert!(ops.iter().all(|op| op.y_mm <= PAGE_BOTTOM_MM));
    let first_on_second_page = ops.iter().find(|op| op.page == 1).unwrap();
    assert_eq!(first_on_second_page.y_mm, 15.0);
}

#[test]
fn long_lines_are_wrapped_to_the_character_budget() {
    let long: String = std::iter::repeat("longword").take(40).collect::<Vec<_>>().join(" ");
    let ops = plan_document(&spec(&long, &[]));

    let body_lines: Vec<&str> = ops
        .iter()
        .skip(2) // title and "Summary:" heading
        .take_while(|op| op.text != "Key Points:")
        .map(|op| op.text.as_str())
        .collect();

    assert!(body_lines.len() > 1, "long paragraph must wrap");
    assert!(body_lines.iter().all(|line| line.len() <= 90));
    assert_eq!(body_lines.join(" "), long);
}

#[test]
fn empty_summary_still_produces_both_sections() {
    let ops = plan_document(&spec("", &["only point"]));
    let texts: Vec<&str> = ops.iter().map(|op| op.text.as_str()).collect();

    assert!(texts.contains(&"Summary:"));
    assert!(texts.contains(&"Key Points:"));
    assert!(texts.contains(&"1. only point"));
}

#[test]
fn rendered_document_is_a_pdf() {
    let bytes = render_document(&spec("Para one.\n\nPara two.", &["A", "B"])).expect("render ok");

    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 500);
}
