//! Radar chart drawn on a terminal canvas.

use super::theme::Theme;
use crate::scoring::RadarChart;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Angle of axis `index` out of `count`; the first axis points up and the
/// rest follow clockwise.
pub fn axis_angle(index: usize, count: usize) -> f64 {
    FRAC_PI_2 - TAU * index as f64 / count.max(1) as f64
}

/// Position of `value` on an axis scaled so `max` reaches `radius`.
pub fn point_on_axis(index: usize, count: usize, value: f64, max: f64, radius: f64) -> (f64, f64) {
    let r = radius * (value / max).clamp(0.0, 1.0);
    let angle = axis_angle(index, count);
    (r * angle.cos(), r * angle.sin())
}

/// Vertices of the data polygon, one per axis.
pub fn polygon_points(chart: &RadarChart, radius: f64) -> Vec<(f64, f64)> {
    let max = f64::from(chart.options.suggested_max.max(1));
    let count = chart.scores.len();
    chart
        .scores
        .iter()
        .enumerate()
        .map(|(i, &score)| point_on_axis(i, count, f64::from(score), max, radius))
        .collect()
}

/// Grid ring values: `step_size`, `2 * step_size`, ... up to `suggested_max`.
pub fn ring_values(chart: &RadarChart) -> Vec<u32> {
    let step = chart.options.step_size.max(1);
    (1..)
        .map(|i| i * step)
        .take_while(|v| *v <= chart.options.suggested_max)
        .collect()
}

fn closed_edges(points: &[(f64, f64)]) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}

pub fn render(frame: &mut Frame, chart: &RadarChart, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Quality Dimensions Radar Chart ")
        .border_style(theme.muted_style());

    if chart.is_empty() {
        let empty = Paragraph::new("No dimensions selected.")
            .style(theme.muted_style())
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    const RADIUS: f64 = 1.0;
    let count = chart.labels.len();
    let max = f64::from(chart.options.suggested_max.max(1));
    let rings: Vec<Vec<(f64, f64)>> = ring_values(chart)
        .into_iter()
        .map(|v| {
            (0..count)
                .map(|i| point_on_axis(i, count, f64::from(v), max, RADIUS))
                .collect()
        })
        .collect();
    let data = polygon_points(chart, RADIUS);
    let labels: Vec<((f64, f64), String)> = chart
        .axes()
        .enumerate()
        .map(|(i, (label, score))| {
            let (x, y) = point_on_axis(i, count, max, max, RADIUS * 1.12);
            ((x, y), format!("{label} ({score})"))
        })
        .collect();

    let grid_color = theme.muted;
    let data_color = theme.primary;
    let label_style = Style::default().fg(theme.text);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-1.6, 1.6])
        .y_bounds([-1.3, 1.3])
        .paint(move |ctx| {
            for ring in &rings {
                for ((x1, y1), (x2, y2)) in closed_edges(ring) {
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: grid_color,
                    });
                }
            }
            for i in 0..count {
                let (x2, y2) = point_on_axis(i, count, max, max, RADIUS);
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2,
                    y2,
                    color: grid_color,
                });
            }
            ctx.layer();
            for ((x1, y1), (x2, y2)) in closed_edges(&data) {
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: data_color,
                });
            }
            for ((x, y), text) in &labels {
                // Shift left-hand labels so they end near their axis
                let x = if *x < -0.1 {
                    x - 0.02 * text.len() as f64
                } else {
                    *x
                };
                ctx.print(x, *y, Span::styled(text.clone(), label_style));
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(scores: Vec<u32>) -> RadarChart {
        let labels = (0..scores.len()).map(|i| format!("axis {i}")).collect();
        RadarChart::new(labels, scores)
    }

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_full_scores_reach_radius_clockwise_from_top() {
        let points = polygon_points(&chart(vec![100, 100, 100, 100]), 1.0);
        assert_close(points[0], (0.0, 1.0));
        assert_close(points[1], (1.0, 0.0));
        assert_close(points[2], (0.0, -1.0));
        assert_close(points[3], (-1.0, 0.0));
    }

    #[test]
    fn test_zero_score_sits_at_center() {
        let points = polygon_points(&chart(vec![0, 50]), 2.0);
        assert_close(points[0], (0.0, 0.0));
        assert_close(points[1], (0.0, -1.0));
    }

    #[test]
    fn test_rings_follow_step_size() {
        assert_eq!(ring_values(&chart(vec![1])), vec![20, 40, 60, 80, 100]);
    }

    #[test]
    fn test_edges_close_the_polygon() {
        let points = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
        let edges: Vec<_> = closed_edges(&points).collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], ((0.0, 1.0), (0.0, 0.0)));
    }
}
