//! Terminal chart for the compute-overhead curve.
//!
//! Renders the overhead curve as a log-x line chart with the efficient-size
//! reference point (ratio 1 at `N_eff`) and the caller's own model size
//! highlighted when present. Rendering goes through ratatui's `TestBackend`
//! into a plain-text buffer, so it works in tests, pipes, and demos without
//! a live terminal.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Terminal;

use crate::overhead::OverheadCurve;

/// Text-buffer chart renderer for [`OverheadCurve`].
#[derive(Debug, Clone, Copy)]
pub struct OverheadChart {
    width: u16,
    height: u16,
}

impl Default for OverheadChart {
    fn default() -> Self {
        Self::new(100, 30)
    }
}

impl OverheadChart {
    /// Create a renderer with the given buffer size in terminal cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Render the curve to a plain-text string.
    pub fn render(&self, curve: &OverheadCurve) -> std::io::Result<String> {
        let backend = TestBackend::new(self.width, self.height);
        let mut terminal = Terminal::new(backend)?;

        let Some(((n_min, n_max), (ratio_min, ratio_max))) = curve.bounds() else {
            terminal.draw(|f| {
                let msg = Paragraph::new("No well-defined points for these exponents").block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Compute Overhead "),
                );
                f.render_widget(msg, f.area());
            })?;
            return Ok(buffer_to_plain(terminal.backend().buffer()));
        };

        // Log-x: plot against log10(n) so the two-decade span reads evenly.
        let line: Vec<(f64, f64)> = curve
            .points
            .iter()
            .map(|&(n, ratio)| (n.log10(), ratio))
            .collect();
        let reference = [(curve.n_eff.log10(), 1.0)];
        let highlight: Vec<(f64, f64)> = curve
            .highlight
            .map(|(n, ratio)| (n.log10(), ratio))
            .into_iter()
            .collect();

        let x_bounds = [n_min.log10(), n_max.log10()];
        let y_margin = (ratio_max - ratio_min).max(0.1) * 0.1;
        let y_bounds = [(ratio_min - y_margin).max(0.0), ratio_max + y_margin];

        let mut datasets = vec![
            Dataset::default()
                .name("C/C_min")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&line),
            Dataset::default()
                .name("N_eff")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Green))
                .data(&reference),
        ];
        if !highlight.is_empty() {
            datasets.push(
                Dataset::default()
                    .name("N")
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(Color::Yellow))
                    .data(&highlight),
            );
        }

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Compute Overhead vs Model Size "),
            )
            .x_axis(
                Axis::default()
                    .title("Params (log10)")
                    .style(Style::default().fg(Color::Gray))
                    .bounds(x_bounds)
                    .labels(vec![
                        format!("10^{:.1}", x_bounds[0]),
                        format!("10^{:.1}", (x_bounds[0] + x_bounds[1]) / 2.0),
                        format!("10^{:.1}", x_bounds[1]),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .title("C/C_min")
                    .style(Style::default().fg(Color::Gray))
                    .bounds(y_bounds)
                    .labels(vec![
                        format!("{:.2}", y_bounds[0]),
                        format!("{:.2}", (y_bounds[0] + y_bounds[1]) / 2.0),
                        format!("{:.2}", y_bounds[1]),
                    ]),
            );

        terminal.draw(|f| f.render_widget(chart, f.area()))?;
        Ok(buffer_to_plain(terminal.backend().buffer()))
    }
}

fn buffer_to_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}
