use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Polygon,
    Rgb,
};

use crate::error::PitchError;
use crate::model::scores::{ScoreSet, category_order, format_overall};

pub const REPORT_TITLE: &str = "AI Pitch Evaluation Report";
pub const TABLE_HEADER: [&str; 2] = ["Metric", "Score"];

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN_TOP: f32 = 25.0;
const SPACER: f32 = 12.7;
const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 10.0;
const BODY_LEADING: f32 = 5.0;
const ROW_H: f32 = 7.0;
const COL_W: [f32; 2] = [45.0, 30.0];
const CELL_PAD: f32 = 2.0;
const WRAP_CHARS: usize = 95;

pub struct PdfReport<'a> {
    pub scores: &'a ScoreSet,
    pub timestamp: &'a str,
    pub report_text: &'a str,
}

/// Header row followed by one row per metric and the overall score.
pub fn score_table_rows(scores: &ScoreSet) -> Vec<[String; 2]> {
    let mut rows = Vec::with_capacity(7);
    rows.push([TABLE_HEADER[0].to_string(), TABLE_HEADER[1].to_string()]);
    for &category in category_order() {
        rows.push([
            category.table_label().to_string(),
            scores.get(category).to_string(),
        ]);
    }
    rows.push(["Overall".to_string(), format_overall(scores.overall)]);
    rows
}

/// Splits report text into printable lines; blank lines are kept as line breaks.
pub fn paragraph_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| wrap_line(line, WRAP_CHARS))
        .collect()
}

pub fn wrap_line(line: &str, max_chars: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}

pub fn write_pdf_report(path: &Path, report: &PdfReport<'_>) -> Result<(), PitchError> {
    let (doc, page, layer) = PdfDocument::new(REPORT_TITLE, Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
    let layer = doc.get_page(page).get_layer(layer);
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| PitchError::pdf(path, e))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| PitchError::pdf(path, e))?;

    let mut y = PAGE_H - MARGIN_TOP;
    let title_x = (PAGE_W - REPORT_TITLE.len() as f32 * TITLE_SIZE * 0.2) / 2.0;
    layer.use_text(REPORT_TITLE, TITLE_SIZE, Mm(title_x), Mm(y), &bold);
    y -= SPACER;

    layer.use_text(
        format!("Date: {}", report.timestamp),
        BODY_SIZE,
        Mm(left_margin()),
        Mm(y),
        &regular,
    );
    y -= SPACER;

    y = draw_score_table(&layer, &score_table_rows(report.scores), y, &regular, &bold);
    y -= SPACER;

    for line in paragraph_lines(report.report_text) {
        if !line.is_empty() {
            layer.use_text(line, BODY_SIZE, Mm(left_margin()), Mm(y), &regular);
        }
        y -= BODY_LEADING;
    }

    let file = File::create(path)
        .map_err(|e| PitchError::io(format!("creating {}", path.display()), e))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| PitchError::pdf(path, e))?;
    Ok(())
}

fn left_margin() -> f32 {
    (PAGE_W - COL_W[0] - COL_W[1]) / 2.0
}

/// Draws the bordered table with a shaded header row; returns the y below it.
fn draw_score_table(
    layer: &PdfLayerReference,
    rows: &[[String; 2]],
    top: f32,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) -> f32 {
    let x0 = left_margin();
    let x1 = x0 + COL_W[0];
    let x2 = x1 + COL_W[1];
    let bottom = top - ROW_H * rows.len() as f32;

    layer.set_fill_color(grey());
    layer.add_polygon(Polygon {
        rings: vec![vec![
            (Point::new(Mm(x0), Mm(top - ROW_H)), false),
            (Point::new(Mm(x2), Mm(top - ROW_H)), false),
            (Point::new(Mm(x2), Mm(top)), false),
            (Point::new(Mm(x0), Mm(top)), false),
        ]],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });

    layer.set_fill_color(black());
    for (i, row) in rows.iter().enumerate() {
        let baseline = top - ROW_H * (i as f32 + 1.0) + CELL_PAD;
        let font = if i == 0 { bold } else { regular };
        layer.use_text(row[0].as_str(), BODY_SIZE, Mm(x0 + CELL_PAD), Mm(baseline), font);
        layer.use_text(row[1].as_str(), BODY_SIZE, Mm(x1 + CELL_PAD), Mm(baseline), font);
    }

    layer.set_outline_color(black());
    layer.set_outline_thickness(1.0);
    for i in 0..=rows.len() {
        let y = top - ROW_H * i as f32;
        layer.add_line(segment((x0, y), (x2, y)));
    }
    for x in [x0, x1, x2] {
        layer.add_line(segment((x, top), (x, bottom)));
    }

    bottom
}

fn segment(from: (f32, f32), to: (f32, f32)) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(from.0), Mm(from.1)), false),
            (Point::new(Mm(to.0), Mm(to.1)), false),
        ],
        is_closed: false,
    }
}

fn grey() -> Color {
    Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/pdf.rs"]
mod tests;
