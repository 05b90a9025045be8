use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Widget,
    },
};
use uartscope_wave::{Color as WaveColor, Plot, Point};

use crate::styles::wave_viewer::{AXIS_COLOR, CURVE_COLOR};

/// Square-wave view of a [`Plot`]. Each curve point is drawn as a level held
/// for one unit centered on its x coordinate.
pub struct TimingDiagram<'a> {
    plot: &'a Plot,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    curve_color: Color,
}

type Segment = (Point, Point);

impl<'a> TimingDiagram<'a> {
    pub fn new(plot: &'a Plot) -> Self {
        Self {
            plot,
            x_bounds: [-1.0, 11.0],
            y_bounds: [-0.5, 1.5],
            curve_color: CURVE_COLOR,
        }
    }

    fn paint_axis(&self, ctx: &mut Context) {
        ctx.draw(&CanvasLine::new(
            self.x_bounds[0],
            self.y_bounds[0],
            self.x_bounds[1],
            self.y_bounds[0],
            AXIS_COLOR,
        ));
    }

    fn paint_trace(&self, ctx: &mut Context) {
        for ((x1, y1), (x2, y2)) in trace(self.plot.curve()) {
            ctx.draw(&CanvasLine::new(x1, y1, x2, y2, self.curve_color));
        }
    }

    fn paint_labels(&self, ctx: &mut Context, units_per_cell: f64) {
        for label in self.plot.labels() {
            let half_width = label.text.chars().count() as f64 * units_per_cell / 2.0;
            let x = (label.x - half_width).clamp(self.x_bounds[0], self.x_bounds[1]);
            let y = label.y.clamp(self.y_bounds[0], self.y_bounds[1]);
            let style = Style::new().fg(map_color(label.color));
            ctx.print(x, y, Line::from(Span::styled(label.text.clone(), style)));
        }
    }
}

impl Widget for TimingDiagram<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let units_per_cell = (self.x_bounds[1] - self.x_bounds[0]) / area.width.max(1) as f64;
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(self.x_bounds)
            .y_bounds(self.y_bounds)
            .paint(|ctx| {
                self.paint_axis(ctx);
                ctx.layer();
                self.paint_trace(ctx);
                ctx.layer();
                self.paint_labels(ctx, units_per_cell);
            })
            .render(area, buf);
    }
}

/// Line segments of the square wave through `curve`: one horizontal run per
/// point and a vertical edge wherever consecutive levels differ.
fn trace(curve: &[Point]) -> Vec<Segment> {
    let mut segments = vec![];
    for (i, &(x, y)) in curve.iter().enumerate() {
        segments.push(((x - 0.5, y), (x + 0.5, y)));
        if let Some(&(_, next_y)) = curve.get(i + 1) {
            if next_y != y {
                segments.push(((x + 0.5, y), (x + 0.5, next_y)));
            }
        }
    }
    segments
}

fn map_color(color: WaveColor) -> Color {
    match color {
        WaveColor::Green => Color::Green,
        WaveColor::Yellow => Color::Yellow,
        WaveColor::Red => Color::Red,
        WaveColor::Cyan => Color::Cyan,
        WaveColor::Magenta => Color::Magenta,
    }
}
