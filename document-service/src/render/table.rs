//! Grid tables with a shaded header row and word-wrapped cells.

use super::canvas::{Color, PdfCanvas};
use super::fonts::Font;

const FONT_SIZE: f32 = 9.5;
const LINE_HEIGHT: f32 = 12.0;
const PADDING: f32 = 5.0;
const GRID: Color = (0.78, 0.80, 0.84);
const TEXT: Color = (0.15, 0.15, 0.15);
const HEADER_TEXT: Color = (1.0, 1.0, 1.0);
const EMPHASIS_FILL: Color = (0.90, 0.92, 0.95);

#[derive(Debug, Clone)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Bold on a shaded background.
    pub emphasis: bool,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            emphasis: false,
        }
    }

    pub fn emphasized(cells: Vec<String>) -> Self {
        Self {
            cells,
            emphasis: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    /// Relative column widths; normalised against their sum.
    pub column_weights: Vec<f32>,
    pub rows: Vec<TableRow>,
    pub header_fill: Color,
}

/// Greedy word wrap. Words wider than `max_width` are split by character.
pub fn wrap_text(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if font.text_width(&candidate, size) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        for c in word.chars() {
            current.push(c);
            if font.text_width(&current, size) > max_width && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(c);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Draw `table` at (`x`, `top`) spanning `width`; returns the y just below
/// its last row.
pub fn draw_table(canvas: &mut PdfCanvas, table: &Table, x: f32, top: f32, width: f32) -> f32 {
    let total_weight: f32 = table.column_weights.iter().sum();
    let column_widths: Vec<f32> = table
        .column_weights
        .iter()
        .map(|w| width * w / total_weight.max(f32::EPSILON))
        .collect();

    canvas.set_line_width(0.5);
    canvas.set_stroke_color(GRID);

    let mut y = top;
    y = draw_row(
        canvas,
        &table.headers,
        &column_widths,
        x,
        y,
        Font::Bold,
        Some(table.header_fill),
        HEADER_TEXT,
    );

    for row in &table.rows {
        let (font, fill) = if row.emphasis {
            (Font::Bold, Some(EMPHASIS_FILL))
        } else {
            (Font::Regular, None)
        };
        y = draw_row(canvas, &row.cells, &column_widths, x, y, font, fill, TEXT);
    }

    y
}

#[allow(clippy::too_many_arguments)]
fn draw_row(
    canvas: &mut PdfCanvas,
    cells: &[String],
    column_widths: &[f32],
    x: f32,
    top: f32,
    font: Font,
    fill: Option<Color>,
    text_color: Color,
) -> f32 {
    let wrapped: Vec<Vec<String>> = column_widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let text = cells.get(i).map(String::as_str).unwrap_or("");
            wrap_text(text, font, FONT_SIZE, width - 2.0 * PADDING)
        })
        .collect();

    let line_count = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);
    let height = line_count as f32 * LINE_HEIGHT + 2.0 * PADDING - (LINE_HEIGHT - FONT_SIZE);

    let mut cell_x = x;
    for (width, lines) in column_widths.iter().zip(&wrapped) {
        if let Some(color) = fill {
            canvas.set_fill_color(color);
            canvas.rect(cell_x, top, *width, height, true, true);
        } else {
            canvas.rect(cell_x, top, *width, height, false, true);
        }

        canvas.set_fill_color(text_color);
        for (n, line) in lines.iter().enumerate() {
            let baseline = top + PADDING + FONT_SIZE * 0.8 + n as f32 * LINE_HEIGHT;
            canvas.text(font, FONT_SIZE, cell_x + PADDING, baseline, line);
        }
        cell_x += width;
    }

    top + height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(
            wrap_text("Room Charges", Font::Regular, 10.0, 200.0),
            vec!["Room Charges".to_string()]
        );
    }

    #[test]
    fn long_text_wraps_at_words() {
        let lines = wrap_text(
            "Post-operative care following hip replacement surgery",
            Font::Regular,
            10.0,
            120.0,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(Font::Regular.text_width(line, 10.0) <= 120.0);
        }
        assert_eq!(
            lines.join(" "),
            "Post-operative care following hip replacement surgery"
        );
    }

    #[test]
    fn oversized_word_is_split() {
        let lines = wrap_text("WWWWWWWWWWWW", Font::Bold, 10.0, 40.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "WWWWWWWWWWWW");
    }

    #[test]
    fn empty_text_is_one_blank_line() {
        assert_eq!(wrap_text("", Font::Regular, 10.0, 50.0), vec![String::new()]);
    }

    #[test]
    fn table_height_grows_with_rows() {
        let table = Table {
            headers: vec!["Field".into(), "Value".into()],
            column_weights: vec![1.0, 2.0],
            rows: vec![
                TableRow::new(vec!["Name".into(), "Kamala".into()]),
                TableRow::emphasized(vec!["Grand Total".into(), "Rs. 10.00".into()]),
            ],
            header_fill: (0.2, 0.3, 0.5),
        };
        let mut canvas = PdfCanvas::a4();
        let bottom = draw_table(&mut canvas, &table, 40.0, 100.0, 500.0);
        assert!(bottom > 100.0 + 3.0 * PADDING * 2.0);
    }
}
