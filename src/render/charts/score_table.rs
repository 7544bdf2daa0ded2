//! Score table rendered as a grid, rows tinted by Overall RoB.

use crate::render::canvas::{Canvas, Text};
use crate::render::format::text_width;
use crate::render::style::{Color, Paint, TextAnchor};
use crate::risk::Domain;
use crate::table::AggregatedRow;

use super::ChartContext;
use super::layout::{MARGIN, label_width, no_data, title};

const TITLE: &str = "NOS Score Table";
const ROW_HEIGHT: f64 = 24.0;
const CELL_PADDING: f64 = 8.0;
const HEADER_FILL: Color = Color::rgb(0xE6, 0xE6, 0xE6);
const ROW_OPACITY: f64 = 0.55;

const HEADERS: [&str; 6] = [
    "Study",
    "Selection",
    "Comparability",
    "Outcome/Exposure",
    "Total Score",
    "Overall RoB",
];

fn cells(row: &AggregatedRow) -> [String; 6] {
    [
        row.label().to_string(),
        row.score(Domain::Selection).to_string(),
        row.score(Domain::Comparability).to_string(),
        row.score(Domain::OutcomeExposure).to_string(),
        row.study.total_score.to_string(),
        row.study.overall_rob.clone(),
    ]
}

/// Column widths sized to the widest header or cell.
fn column_widths(rows: &[[String; 6]], fs: f64) -> [f64; 6] {
    let mut widths = HEADERS.map(|h| text_width(h, fs, true));
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = width.max(label_width([cell.as_str()], fs));
        }
    }
    widths.map(|w| w + CELL_PADDING * 2.0)
}

#[allow(clippy::cast_precision_loss)] // Row counts are small
pub fn draw(ctx: &ChartContext<'_>) -> Canvas {
    let fs = ctx.font_size();
    let sorted = ctx.table.sorted_by_overall_desc();
    let rows: Vec<[String; 6]> = sorted.iter().copied().map(cells).collect();
    let widths = column_widths(&rows, fs);
    let table_width: f64 = widths.iter().sum();

    let top = MARGIN + ctx.title_size() + 16.0;
    let body_rows = rows.len().max(1) as f64;
    let width = table_width + MARGIN * 2.0;
    let height = ROW_HEIGHT.mul_add(body_rows + 1.0, top) + MARGIN;
    let mut canvas = Canvas::new(width, height).with_title(TITLE);
    title(&mut canvas, TITLE, width / 2.0, MARGIN + ctx.title_size(), ctx.title_size());

    let header: [String; 6] = HEADERS.map(str::to_string);
    let header_style = RowStyle {
        fill: HEADER_FILL,
        opacity: 1.0,
        bold: true,
    };
    draw_row(&mut canvas, &header, &widths, top, header_style, fs);

    if rows.is_empty() {
        canvas.rect(
            MARGIN,
            top + ROW_HEIGHT,
            table_width,
            ROW_HEIGHT,
            Paint::stroke(Color::BLACK, 0.6),
        );
        no_data(&mut canvas, MARGIN + table_width / 2.0, top + ROW_HEIGHT * 1.5, fs);
    }

    for (index, (row, cells)) in sorted.iter().zip(&rows).enumerate() {
        let y = ROW_HEIGHT.mul_add(index as f64 + 1.0, top);
        let style = RowStyle {
            fill: ctx.palette.label_color(&row.study.overall_rob),
            opacity: ROW_OPACITY,
            bold: false,
        };
        draw_row(&mut canvas, cells, &widths, y, style, fs);
    }
    canvas
}

#[derive(Debug, Clone, Copy)]
struct RowStyle {
    fill: Color,
    opacity: f64,
    bold: bool,
}

fn draw_row(
    canvas: &mut Canvas,
    cells: &[String; 6],
    widths: &[f64; 6],
    y: f64,
    style: RowStyle,
    fs: f64,
) {
    let mut x = MARGIN;
    for (column, (cell, width)) in cells.iter().zip(widths).enumerate() {
        canvas.rect(
            x,
            y,
            *width,
            ROW_HEIGHT,
            Paint::fill(style.fill)
                .with_opacity(style.opacity)
                .with_stroke(Color::BLACK, 0.6),
        );
        // Study names read left-aligned; scores and labels are centred.
        let text = if column == 0 {
            Text::new(x + CELL_PADDING, y + ROW_HEIGHT / 2.0 + fs / 3.0, cell.clone(), fs)
        } else {
            Text::new(x + width / 2.0, y + ROW_HEIGHT / 2.0 + fs / 3.0, cell.clone(), fs)
                .anchored(TextAnchor::Middle)
        };
        canvas.text(if style.bold { text.bold() } else { text });
        x += width;
    }
}

#[cfg(test)]
#[path = "score_table_tests.rs"]
mod tests;
