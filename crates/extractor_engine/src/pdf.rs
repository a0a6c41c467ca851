use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;

use crate::persist::PersistError;

/// Name of the saved artifact.
pub const EXPORT_FILENAME: &str = "extracted-summary.pdf";

/// Cursor offsets past this point (from the top edge) trigger a page break.
pub const PAGE_BOTTOM_MM: f32 = 270.0;

// A4 page geometry, millimetres.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_LEFT_MM: f32 = 10.0;
const KEY_POINT_INDENT_MM: f32 = 12.0;
const TOP_MM: f32 = 15.0;

// Font sizes, points.
const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 11.0;

/// Line-wrap budget: roughly how many characters fit one body line.
const LINE_CHARS: usize = 90;

/// The parts of the page that make it into the exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSpec {
    pub title: String,
    pub summary: String,
    pub key_points: Vec<String>,
}

/// One positioned text run in the planned document.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    pub page: usize,
    pub text: String,
    pub size: f32,
    pub x_mm: f32,
    /// Offset from the top edge of the page.
    pub y_mm: f32,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("pdf error: {0}")]
    Pdf(#[from] printpdf::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Lays the document out as positioned text runs with page assignments.
///
/// Mirrors the on-screen structure: title, "Summary:" heading with the
/// summary paragraphs, then "Key Points:" with numbered entries. The cursor
/// walks down the page and moves to a fresh one past [`PAGE_BOTTOM_MM`].
pub fn plan_document(spec: &DocumentSpec) -> Vec<TextOp> {
    let mut layout = Layout::new();

    layout.push_line(&spec.title, TITLE_SIZE, MARGIN_LEFT_MM, 10.0);

    layout.push_line("Summary:", HEADING_SIZE, MARGIN_LEFT_MM, 8.0);
    for paragraph in paragraphs(&spec.summary) {
        layout.push_wrapped(paragraph, BODY_SIZE, MARGIN_LEFT_MM, 5.0, 13.0);
    }

    layout.advance(4.0);
    layout.push_line("Key Points:", HEADING_SIZE, MARGIN_LEFT_MM, 8.0);
    for (index, point) in spec.key_points.iter().enumerate() {
        let entry = format!("{}. {}", index + 1, point);
        layout.push_wrapped(&entry, BODY_SIZE, KEY_POINT_INDENT_MM, 4.0, 11.0);
    }

    layout.ops
}

/// Renders the planned document into PDF bytes.
pub fn render_document(spec: &DocumentSpec) -> Result<Vec<u8>, ExportError> {
    let ops = plan_document(spec);
    let page_count = ops.iter().map(|op| op.page).max().unwrap_or(0) + 1;

    let (doc, first_page, first_layer) = PdfDocument::new(
        spec.title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let mut layers = Vec::with_capacity(page_count);
    layers.push(doc.get_page(first_page).get_layer(first_layer));
    for _ in 1..page_count {
        let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        layers.push(doc.get_page(page).get_layer(layer));
    }

    for op in &ops {
        // The planner tracks offsets from the top edge; PDF y grows upward.
        layers[op.page].use_text(
            op.text.clone(),
            op.size,
            Mm(op.x_mm),
            Mm(PAGE_HEIGHT_MM - op.y_mm),
            &font,
        );
    }

    Ok(doc.save_to_bytes()?)
}

struct Layout {
    ops: Vec<TextOp>,
    page: usize,
    y: f32,
}

impl Layout {
    fn new() -> Self {
        Self {
            ops: Vec::new(),
            page: 0,
            y: TOP_MM,
        }
    }

    fn advance(&mut self, step: f32) {
        self.y += step;
    }

    /// Writes one line at the cursor and advances it by `step`.
    fn push_line(&mut self, text: &str, size: f32, x: f32, step: f32) {
        if self.y > PAGE_BOTTOM_MM {
            self.page += 1;
            self.y = TOP_MM;
        }
        self.ops.push(TextOp {
            page: self.page,
            text: text.to_owned(),
            size,
            x_mm: x,
            y_mm: self.y,
        });
        self.y += step;
    }

    /// Writes a block wrapped to the line budget, spacing the wrapped lines
    /// by `line_step` and leaving `block_step` after the final one.
    fn push_wrapped(&mut self, text: &str, size: f32, x: f32, line_step: f32, block_step: f32) {
        let lines = wrap_line(text, LINE_CHARS);
        let last = lines.len() - 1;
        for (index, line) in lines.into_iter().enumerate() {
            let step = if index == last { block_step } else { line_step };
            self.push_line(&line, size, x, step);
        }
    }
}

/// Summary paragraphs: newline runs delimit; blank segments are dropped.
fn paragraphs(summary: &str) -> impl Iterator<Item = &str> {
    summary.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Greedy word wrap against a character budget. A single word longer than
/// the budget stays on its own line rather than being split.
fn wrap_line(text: &str, budget: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= budget {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
