//! Vertical colorbar for discretized color scales.

use crate::plotting::element::{escape_xml, Bounds, Text};
use crate::plotting::style::{
    BoundaryNorm, Color, Colormap, DominantBaseline, FillStyle, TextAnchor, TextStyle,
};

/// A vertical colorbar drawn beside an axes.
///
/// Each interior region of the norm gets an equal share of the bar; extended
/// ends are drawn as triangular caps in the colormap's under/over colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Colorbar {
    pub cmap: Colormap,
    pub norm: BoundaryNorm,
    pub label: Option<String>,
    pub label_style: TextStyle,
    pub tick_label_style: TextStyle,
    /// Length of each extension cap as a fraction of the interior length
    pub extend_frac: f64,
    /// Width of the bar as a fraction of the parent axes region
    pub fraction: f64,
    /// Gap between the axes and the bar as a fraction of the parent region
    pub pad: f64,
}

impl Colorbar {
    pub fn new(cmap: Colormap, norm: BoundaryNorm) -> Self {
        Colorbar {
            cmap,
            norm,
            label: None,
            label_style: TextStyle::new().font_size(10.0),
            tick_label_style: TextStyle::new().font_size(10.0),
            extend_frac: 0.05,
            fraction: 0.15,
            pad: 0.05,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Colors of the interior regions, bottom to top.
    pub fn region_colors(&self) -> Vec<Color> {
        self.norm
            .boundaries()
            .windows(2)
            .map(|w| self.cmap.color_at(self.norm.index((w[0] + w[1]) / 2.0)))
            .collect()
    }

    /// Color of the lower extension cap, if the norm extends below.
    pub fn under_cap(&self) -> Option<Color> {
        self.norm
            .extend()
            .extends_min()
            .then(|| self.cmap.color_at(self.norm.under_index()))
    }

    /// Color of the upper extension cap, if the norm extends above.
    pub fn over_cap(&self) -> Option<Color> {
        self.norm
            .extend()
            .extends_max()
            .then(|| self.cmap.color_at(self.norm.over_index()))
    }

    /// Pixel box of the interior (non-cap) part of a bar occupying `outer`.
    pub fn interior_bounds(&self, outer: &Bounds) -> Bounds {
        let caps = usize::from(self.under_cap().is_some()) + usize::from(self.over_cap().is_some());
        let interior_len = outer.height() / (1.0 + caps as f64 * self.extend_frac);
        let cap_len = interior_len * self.extend_frac;
        let top = if self.over_cap().is_some() { outer.y_min + cap_len } else { outer.y_min };
        Bounds::new(outer.x_min, outer.x_max, top, top + interior_len)
    }

    /// Render the bar, its ticks and label into `outer` (pixel coordinates).
    pub fn render_svg(&self, outer: &Bounds, axis_color: &Color) -> String {
        let mut svg = String::new();
        let inner = self.interior_bounds(outer);
        let colors = self.region_colors();
        let step = inner.height() / colors.len() as f64;

        for (i, color) in colors.iter().enumerate() {
            // Region 0 sits at the bottom.
            let y = inner.y_max - (i + 1) as f64 * step;
            svg.push_str(&format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>\n",
                inner.x_min,
                y,
                inner.width(),
                step,
                FillStyle::new(color.clone()).edge_matches_face(0.5).to_svg_style()
            ));
        }

        let mid_x = (inner.x_min + inner.x_max) / 2.0;
        if let Some(color) = self.under_cap() {
            svg.push_str(&format!(
                "<path d=\"M{:.2},{:.2} L{:.2},{:.2} L{:.2},{:.2} Z\" {}/>\n",
                inner.x_min, inner.y_max, inner.x_max, inner.y_max, mid_x, outer.y_max,
                FillStyle::new(color).to_svg_style()
            ));
        }
        if let Some(color) = self.over_cap() {
            svg.push_str(&format!(
                "<path d=\"M{:.2},{:.2} L{:.2},{:.2} L{:.2},{:.2} Z\" {}/>\n",
                inner.x_min, inner.y_min, inner.x_max, inner.y_min, mid_x, outer.y_min,
                FillStyle::new(color).to_svg_style()
            ));
        }

        // Outline follows the caps.
        svg.push_str(&format!(
            "<path d=\"M{:.2},{:.2} L{:.2},{:.2} L{:.2},{:.2} L{:.2},{:.2} L{:.2},{:.2} L{:.2},{:.2} Z\" fill=\"none\" stroke=\"{}\" stroke-width=\"0.8\"/>\n",
            inner.x_min, inner.y_max,
            if self.under_cap().is_some() { mid_x } else { inner.x_min },
            if self.under_cap().is_some() { outer.y_max } else { inner.y_max },
            inner.x_max, inner.y_max,
            inner.x_max, inner.y_min,
            if self.over_cap().is_some() { mid_x } else { inner.x_max },
            if self.over_cap().is_some() { outer.y_min } else { inner.y_min },
            inner.x_min, inner.y_min,
            axis_color.to_svg_string()
        ));

        // Ticks at every boundary, labelled on the right.
        let mut label_style = self.tick_label_style.clone();
        label_style.anchor = TextAnchor::Start;
        label_style.baseline = DominantBaseline::Middle;
        let mut widest = 0usize;
        for (i, b) in self.norm.boundaries().iter().enumerate() {
            let y = inner.y_max - i as f64 * step;
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"0.8\"/>\n",
                inner.x_max, y, inner.x_max + 3.5, y,
                axis_color.to_svg_string()
            ));
            let text = format_boundary(*b);
            widest = widest.max(text.chars().count());
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" {}>{}</text>\n",
                inner.x_max + 7.0,
                y,
                label_style.to_svg_attrs(),
                escape_xml(&text)
            ));
        }

        if let Some(ref label) = self.label {
            let x = inner.x_max + 7.0 + widest as f64 * self.tick_label_style.font_size * 0.6 + 6.0;
            let y = (inner.y_min + inner.y_max) / 2.0;
            let style = self
                .label_style
                .clone()
                .anchor(TextAnchor::Middle)
                .baseline(DominantBaseline::Hanging)
                .rotation(-90.0);
            svg.push_str(&Text::new(label.as_str(), x, y).style(style).to_svg());
            svg.push('\n');
        }

        svg
    }
}

fn format_boundary(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let s = format!("{:.3}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
