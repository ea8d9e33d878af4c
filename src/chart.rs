//! Bar chart for a top-K selection, rendered as inline SVG.

use crate::domain::RankedEntry;
use ammonia::clean_text;
use std::fmt::Write;

const WIDTH: f32 = 640.0;
const HEIGHT: f32 = 360.0;
const MARGIN_LEFT: f32 = 56.0;
const MARGIN_BOTTOM: f32 = 96.0;
const MARGIN_TOP: f32 = 32.0;
const BAR_FILL: &str = "#e12127";
const OUTLINE: &str = "#666666";
const GRID: &str = "#999999";

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub y_max: f32,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn new(title: impl Into<String>, selection: &[RankedEntry]) -> Self {
        Self {
            title: title.into(),
            x_label: "Class",
            y_label: "Probability",
            y_max: 1.01,
            bars: selection
                .iter()
                .map(|entry| Bar {
                    label: entry.name.clone(),
                    value: entry.score,
                })
                .collect(),
        }
    }

    pub fn to_svg(&self) -> String {
        let plot_w = WIDTH - MARGIN_LEFT;
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline = MARGIN_TOP + plot_h;

        let mut svg = String::new();
        // Writing into a String cannot fail.
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" role="img">"#
        );
        let _ = write!(
            svg,
            r#"<text x="{x}" y="20" text-anchor="middle" font-size="16">{title}</text>"#,
            x = WIDTH / 2.0,
            title = clean_text(&self.title)
        );
        let _ = write!(
            svg,
            r#"<rect x="{MARGIN_LEFT}" y="{MARGIN_TOP}" width="{plot_w}" height="{plot_h}" fill="none" stroke="{OUTLINE}"/>"#
        );

        for tick in [0.0_f32, 0.25, 0.5, 0.75, 1.0] {
            let y = baseline - tick / self.y_max * plot_h;
            let _ = write!(
                svg,
                r#"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{WIDTH}" y2="{y:.1}" stroke="{GRID}" stroke-opacity="0.1"/><text x="{tx}" y="{ty:.1}" text-anchor="end" font-size="10">{tick:.2}</text>"#,
                tx = MARGIN_LEFT - 4.0,
                ty = y + 3.0
            );
        }

        if !self.bars.is_empty() {
            let slot = plot_w / self.bars.len() as f32;
            let bar_w = slot * 0.8;
            for (i, bar) in self.bars.iter().enumerate() {
                let h = bar.value.clamp(0.0, self.y_max) / self.y_max * plot_h;
                let x = MARGIN_LEFT + slot * i as f32 + (slot - bar_w) / 2.0;
                let cx = x + bar_w / 2.0;
                let label = clean_text(&bar.label);
                let _ = write!(
                    svg,
                    r#"<rect class="bar" x="{x:.1}" y="{y:.1}" width="{bar_w:.1}" height="{h:.1}" fill="{BAR_FILL}"><title>{label}: {value:.4}</title></rect>"#,
                    y = baseline - h,
                    value = bar.value
                );
                let _ = write!(
                    svg,
                    r#"<text x="{cx:.1}" y="{ly:.1}" transform="rotate(-57 {cx:.1} {ly:.1})" text-anchor="end" font-size="11">{label}</text>"#,
                    ly = baseline + 14.0
                );
            }
        }

        let _ = write!(
            svg,
            r#"<text x="{x}" y="{y}" text-anchor="middle" font-size="12">{x_label}</text>"#,
            x = MARGIN_LEFT + plot_w / 2.0,
            y = HEIGHT - 6.0,
            x_label = self.x_label
        );
        let _ = write!(
            svg,
            r#"<text x="14" y="{y}" transform="rotate(-90 14 {y})" text-anchor="middle" font-size="12">{y_label}</text>"#,
            y = MARGIN_TOP + plot_h / 2.0,
            y_label = self.y_label
        );
        svg.push_str("</svg>");
        svg
    }
}
