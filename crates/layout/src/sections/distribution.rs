use super::TITLE_BASELINE;
use crate::document::ReportSummary;
use crate::elements::{Paint, PaintMode};
use crate::primitives::{bar_segments, rounded_rect};
use crate::surface::DrawingSurface;
use crate::text::{text_width, TextStyle};
use stockreport_style::metrics::{DISTRIBUTION_BAR_OFFSET, LEGEND_OFFSET};
use stockreport_style::{Font, TextAlign, Theme};
use stockreport_types::Point;

const MIN_LABELLED_SHARE: f64 = 5.0;
const LEGEND_SPACING: f32 = 60.0;
const LABEL_SIZE: f32 = 7.0;

/// Share of `count` in `total` as `"42%"`, only when it exceeds 5%.
pub fn percentage_label(count: usize, total: usize) -> Option<String> {
    if total == 0 {
        return None;
    }
    let share = count as f64 * 100.0 / total as f64;
    (share > MIN_LABELLED_SHARE).then(|| format!("{:.0}%", share))
}

/// Horizontal stacked bar of healthy / low / depleted lines plus its legend.
pub fn render_distribution(
    surface: &mut dyn DrawingSurface,
    summary: &ReportSummary,
    start_y: f32,
    theme: &Theme,
) -> f32 {
    let page = &theme.page;
    let palette = &theme.palette;
    let labels = &theme.labels;
    let left = page.content_left();

    surface.text(
        &labels.distribution_section,
        left,
        start_y + TITLE_BASELINE,
        &TextStyle::new(Font::HELVETICA_BOLD, 10.0, palette.dark),
    );

    let bar = stockreport_types::Rect::new(
        left,
        start_y + DISTRIBUTION_BAR_OFFSET,
        page.content_width(),
        page.bar_height,
    );
    rounded_rect(surface, bar, Some(page.bar_height / 2.0), PaintMode::Fill, palette.light_gray);

    let counts = summary.status_counts();
    let colors = [palette.success, palette.warning, palette.danger];
    let segments = bar_segments(&counts, summary.line_count, bar);
    let label_style = TextStyle::new(Font::HELVETICA_BOLD, LABEL_SIZE, palette.white)
        .aligned(TextAlign::Center);
    for ((segment, count), color) in segments.iter().zip(counts).zip(colors) {
        if segment.is_degenerate() {
            continue;
        }
        surface.fill_rect(*segment, color);
        if let Some(label) = percentage_label(count, summary.line_count) {
            if text_width(&label, label_style.font, LABEL_SIZE) < segment.width {
                let baseline = segment.y + segment.height / 2.0 + 1.2;
                surface.text(&label, segment.center().x, baseline, &label_style);
            }
        }
    }

    let legend_y = bar.bottom() + LEGEND_OFFSET;
    let legend = [
        (&labels.healthy_legend, counts[0], colors[0]),
        (&labels.low_legend, counts[1], colors[1]),
        (&labels.depleted_legend, counts[2], colors[2]),
    ];
    let legend_style = TextStyle::new(Font::HELVETICA, 8.0, palette.gray);
    for (i, (label, count, color)) in legend.into_iter().enumerate() {
        let x = left + LEGEND_SPACING * i as f32;
        surface.circle(Point::new(x + 2.0, legend_y - 1.2), 1.8, Paint::fill(color));
        surface.text(&format!("{} ({})", label, count), x + 6.0, legend_y, &legend_style);
    }

    legend_y + page.section_gap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::DrawOp;
    use crate::test_utils::{a4_page, line, texts};

    fn filled_rects(page: &crate::Page) -> Vec<stockreport_types::Rect> {
        page.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn labels_only_above_five_percent() {
        assert_eq!(percentage_label(1, 2), Some("50%".to_string()));
        assert_eq!(percentage_label(1, 20), None);
        assert_eq!(percentage_label(2, 20), Some("10%".to_string()));
        assert_eq!(percentage_label(3, 0), None);
    }

    #[test]
    fn segments_follow_counts() {
        let theme = Theme::default();
        let lines = vec![line("A", 20, None), line("B", 20, None), line("C", 3, None), line("D", 0, None)];
        let summary = ReportSummary::from_lines(&lines);
        let mut page = a4_page();
        render_distribution(&mut page, &summary, 183.0, &theme);

        let segments = filled_rects(&page);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].width, 90.0);
        assert_eq!(segments[1].x, segments[0].right());
        assert_eq!(segments[2].x, segments[1].right());

        let texts = texts(&page);
        assert!(texts.contains(&"50%"));
        assert!(texts.contains(&"25%"));
        assert!(texts.contains(&"Sin Stock (1)"));
    }

    #[test]
    fn empty_inventory_draws_track_and_legend_only() {
        let theme = Theme::default();
        let mut page = a4_page();
        let next = render_distribution(&mut page, &ReportSummary::default(), 183.0, &theme);
        assert!(filled_rects(&page).is_empty());
        assert!(next > 183.0);
        let texts = texts(&page);
        assert!(texts.contains(&"Stock Alto (0)"));
        assert!(!texts.iter().any(|t| t.ends_with('%')));
    }
}
