use super::{TITLE_BASELINE, TITLE_BLOCK};
use crate::format::{format_count, format_currency, format_price, format_short_date};
use crate::pagination::{check_fit, ReportCanvas};
use crate::surface::DrawingSurface;
use crate::text::{fit_text, TextStyle};
use crate::LayoutError;
use log::debug;
use rust_decimal::Decimal;
use stockreport_model::{InventoryLine, StockStatus, LOW_STOCK_THRESHOLD};
use stockreport_style::{Font, TableMetrics, TextAlign, Theme};
use stockreport_types::{Color, Point, Rect};

const RULE_WIDTH: f32 = 0.2;
/// Baseline drop below the vertical centre of a cell, per point of font size.
const BASELINE_PER_PT: f32 = 0.125;

/// Index, code, product, quantity, status, price, updated.
const ALIGNMENTS: [TextAlign; 7] = [
    TextAlign::Center,
    TextAlign::Left,
    TextAlign::Left,
    TextAlign::Center,
    TextAlign::Center,
    TextAlign::Right,
    TextAlign::Center,
];

#[derive(Debug, Clone, PartialEq)]
pub struct TableOutcome {
    /// First free y on the page the table ended on.
    pub end_y: f32,
    pub rows: usize,
    pub total_quantity: i64,
    pub total_value: Decimal,
}

struct Columns {
    edges: [f32; 8],
}

impl Columns {
    fn new(left: f32, table: &TableMetrics) -> Self {
        let mut edges = [left; 8];
        for (i, width) in table.column_widths.iter().enumerate() {
            edges[i + 1] = edges[i] + width;
        }
        Columns { edges }
    }

    fn left(&self) -> f32 {
        self.edges[0]
    }

    fn right(&self) -> f32 {
        self.edges[7]
    }

    fn anchor(&self, column: usize, padding: f32) -> f32 {
        let (start, end) = (self.edges[column], self.edges[column + 1]);
        match ALIGNMENTS[column] {
            TextAlign::Left => start + padding,
            TextAlign::Center => (start + end) / 2.0,
            TextAlign::Right => end - padding,
        }
    }

    fn inner_width(&self, column: usize, padding: f32) -> f32 {
        (self.edges[column + 1] - self.edges[column] - 2.0 * padding).max(0.0)
    }

    fn band(&self, y: f32, height: f32) -> Rect {
        Rect::new(self.left(), y, self.right() - self.left(), height)
    }
}

struct Cell {
    text: String,
    font: Font,
    color: Color,
}

impl Cell {
    fn new(text: impl Into<String>, font: Font, color: Color) -> Self {
        Cell {
            text: text.into(),
            font,
            color,
        }
    }
}

/// Detail table with a repeated column header on every page and a closing
/// `TOTAL` row. Rows that would cross into the footer zone move to a new page.
pub fn render_detail_table(
    canvas: &mut ReportCanvas<'_>,
    lines: &[InventoryLine],
    start_y: f32,
    theme: &Theme,
) -> Result<TableOutcome, LayoutError> {
    let page = &theme.page;
    let table = &page.table;
    let body_bottom = page.body_bottom();

    let header_and_row = table.header_height + table.row_height;
    let usable = body_bottom - page.continuation_top();
    if header_and_row > usable {
        return Err(LayoutError::ElementTooLarge(header_and_row, usable));
    }

    let columns = Columns::new(page.content_left(), table);
    let mut y = start_y;
    if check_fit(y, TITLE_BLOCK + header_and_row, body_bottom).should_break {
        canvas.break_page()?;
        y = page.continuation_top();
    }

    canvas.surface().text(
        &theme.labels.detail_section,
        page.content_left(),
        y + TITLE_BASELINE,
        &TextStyle::new(Font::HELVETICA_BOLD, 12.0, theme.palette.dark),
    );
    y += TITLE_BLOCK;
    draw_column_header(canvas.surface(), &columns, y, theme);
    y += table.header_height;

    let mut total_quantity: i64 = 0;
    let mut total_value = Decimal::ZERO;
    for (index, line) in lines.iter().enumerate() {
        y = ensure_row_fits(canvas, &columns, y, theme)?;
        draw_line_row(canvas.surface(), &columns, index, line, y, theme);
        total_quantity = total_quantity.saturating_add(line.on_hand());
        total_value = total_value.saturating_add(line.stock_value());
        y += table.row_height;
    }

    y = ensure_row_fits(canvas, &columns, y, theme)?;
    draw_total_row(canvas.surface(), &columns, total_quantity, total_value, y, theme);
    y += table.row_height;

    Ok(TableOutcome {
        end_y: y,
        rows: lines.len(),
        total_quantity,
        total_value,
    })
}

fn ensure_row_fits(
    canvas: &mut ReportCanvas<'_>,
    columns: &Columns,
    y: f32,
    theme: &Theme,
) -> Result<f32, LayoutError> {
    let page = &theme.page;
    if !check_fit(y, page.table.row_height, page.body_bottom()).should_break {
        return Ok(y);
    }
    canvas.break_page()?;
    let top = page.continuation_top();
    draw_column_header(canvas.surface(), columns, top, theme);
    debug!("Detail table continues on page {}", canvas.page_number());
    Ok(top + page.table.header_height)
}

fn draw_column_header(surface: &mut dyn DrawingSurface, columns: &Columns, y: f32, theme: &Theme) {
    let table = &theme.page.table;
    let palette = &theme.palette;
    surface.fill_rect(columns.band(y, table.header_height), palette.dark);
    let cells: Vec<Cell> = theme
        .labels
        .columns
        .iter()
        .map(|title| Cell::new(title.as_str(), Font::HELVETICA_BOLD, palette.white))
        .collect();
    draw_cells(surface, columns, &cells, y, table.header_height, table.header_font_size, table);
}

fn draw_line_row(
    surface: &mut dyn DrawingSurface,
    columns: &Columns,
    index: usize,
    line: &InventoryLine,
    y: f32,
    theme: &Theme,
) {
    let table = &theme.page.table;
    let palette = &theme.palette;
    let labels = &theme.labels;

    let status = line.status();
    let (status_label, status_color, tint) = match status {
        StockStatus::Depleted => (&labels.status_depleted, palette.danger, Some(palette.danger_light)),
        StockStatus::Low => (&labels.status_low, palette.warning, Some(palette.warning_light)),
        StockStatus::Healthy => (&labels.status_healthy, palette.success, None),
    };
    let background = tint.or_else(|| (index % 2 == 1).then_some(palette.row_shade));
    if let Some(color) = background {
        surface.fill_rect(columns.band(y, table.row_height), color);
    }

    let quantity = line.on_hand();
    let quantity_color = match quantity {
        0 => palette.danger,
        q if q <= LOW_STOCK_THRESHOLD => palette.warning,
        _ => palette.dark,
    };
    let status_font = if status.needs_attention() {
        Font::HELVETICA_BOLD
    } else {
        Font::HELVETICA
    };

    let cells = [
        Cell::new((index + 1).to_string(), Font::HELVETICA, palette.gray),
        Cell::new(or_dash(&line.product_code), Font::COURIER_BOLD, palette.dark),
        Cell::new(or_dash(&line.product_name), Font::HELVETICA, palette.dark),
        Cell::new(format_count(quantity), Font::HELVETICA_BOLD, quantity_color),
        Cell::new(status_label.as_str(), status_font, status_color),
        Cell::new(format_price(&line.unit_price()), Font::HELVETICA, palette.dark),
        Cell::new(format_short_date(line.updated_at.as_ref()), Font::HELVETICA, palette.gray),
    ];
    draw_cells(surface, columns, &cells, y, table.row_height, table.body_font_size, table);
    draw_rule(surface, columns, y + table.row_height, palette.border);
}

fn draw_total_row(
    surface: &mut dyn DrawingSurface,
    columns: &Columns,
    total_quantity: i64,
    total_value: Decimal,
    y: f32,
    theme: &Theme,
) {
    let table = &theme.page.table;
    let palette = &theme.palette;
    surface.fill_rect(columns.band(y, table.row_height), palette.light_gray);
    draw_rule(surface, columns, y, palette.primary);

    let bold = |text: String| Cell::new(text, Font::HELVETICA_BOLD, palette.dark);
    let cells = [
        bold(String::new()),
        bold(String::new()),
        bold(theme.labels.total_label.clone()),
        bold(format_count(total_quantity)),
        bold(String::new()),
        bold(format_currency(total_value)),
        bold(String::new()),
    ];
    draw_cells(surface, columns, &cells, y, table.row_height, table.body_font_size, table);
}

fn draw_cells(
    surface: &mut dyn DrawingSurface,
    columns: &Columns,
    cells: &[Cell],
    y: f32,
    height: f32,
    size: f32,
    table: &TableMetrics,
) {
    let baseline = y + height / 2.0 + size * BASELINE_PER_PT;
    for (column, cell) in cells.iter().enumerate().take(ALIGNMENTS.len()) {
        let padding = table.cell_padding;
        let text = fit_text(&cell.text, cell.font, size, columns.inner_width(column, padding));
        let style = TextStyle::new(cell.font, size, cell.color).aligned(ALIGNMENTS[column]);
        surface.text(&text, columns.anchor(column, padding), baseline, &style);
    }
}

fn draw_rule(surface: &mut dyn DrawingSurface, columns: &Columns, y: f32, color: Color) {
    surface.line(
        Point::new(columns.left(), y),
        Point::new(columns.right(), y),
        color,
        RULE_WIDTH,
    );
}

fn or_dash(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.is_empty() { "-" } else { trimmed }
}
