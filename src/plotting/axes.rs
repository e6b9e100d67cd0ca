//! Axes (subplot) implementation.

use log::debug;

use crate::plotting::data::IntoPlotData;
use crate::plotting::element::{
    escape_xml, AxisConfig, Bounds, Colorbar, GridConfig, GridWhich, Spines, Text,
};
use crate::plotting::plot::{AxLine, LinePlot, Plot, ScatterPlot};
use crate::plotting::scale::{LinearScale, Scale};
use crate::plotting::style::{
    cycle_color, Color, Colormap, DashPattern, DominantBaseline, LineStyle, Marker, MarkerStyle,
    Normalize, TextAnchor, ThemeConfig,
};

/// Grid lines are layered between collections and lines.
pub const GRID_ZORDER: f64 = 1.5;

/// Fraction of the data range added on each side of the autoscaled limits.
const DATA_MARGIN: f64 = 0.05;

/// How data units relate between the two axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aspect {
    /// Fill the available box
    #[default]
    Auto,
    /// One data unit has the same pixel length on both axes
    Equal,
}

/// What gives way when a fixed aspect is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Adjustable {
    /// Shrink the axes box and keep the data limits
    #[default]
    Box,
    /// Keep the box and widen one data range
    DataLim,
}

/// Resolved geometry of an axes for a given figure size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxesLayout {
    /// Plot area in pixels (y grows downward)
    pub pixel_bounds: Bounds,
    /// Visible data limits
    pub data_bounds: Bounds,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    /// Outer box of the colorbar, if one is attached
    pub colorbar_bounds: Option<Bounds>,
}

impl AxesLayout {
    pub fn x_pixels_per_unit(&self) -> f64 {
        self.pixel_bounds.width() / self.data_bounds.width()
    }

    pub fn y_pixels_per_unit(&self) -> f64 {
        self.pixel_bounds.height() / self.data_bounds.height()
    }
}

/// An axes object representing a single plot area.
pub struct Axes {
    /// Position within figure (normalized coordinates, y up)
    pub position: Bounds,
    /// Artists in insertion order
    plots: Vec<Box<dyn Plot>>,
    /// X-axis label
    pub x_label: Option<Text>,
    /// Y-axis label
    pub y_label: Option<Text>,
    /// Grid configuration
    pub grid: GridConfig,
    /// X-axis configuration
    pub x_axis: AxisConfig,
    /// Y-axis configuration
    pub y_axis: AxisConfig,
    /// Frame lines around the plot area
    pub spines: Spines,
    colorbar: Option<Colorbar>,
    aspect: Aspect,
    adjustable: Adjustable,
    /// Data limits gathered from the artists; each axis may be empty on its own
    data_limits: Bounds,
    /// Current color cycle index
    color_index: usize,
    /// Theme configuration
    pub theme: ThemeConfig,
}

impl Axes {
    /// Create a new axes with default settings.
    pub fn new() -> Self {
        Self::with_theme(ThemeConfig::default())
    }

    /// Create an axes whose frame, ticks and grid follow `theme`.
    pub fn with_theme(theme: ThemeConfig) -> Self {
        let frame = LineStyle::new()
            .color(theme.axis_color.clone())
            .width(theme.axis_width);
        let axis = AxisConfig {
            tick_style: frame.clone(),
            tick_label_style: theme.tick_style.clone(),
            ..AxisConfig::default()
        };
        Axes {
            position: Bounds::new(0.125, 0.9, 0.11, 0.88),
            plots: Vec::new(),
            x_label: None,
            y_label: None,
            grid: GridConfig::new().style(
                LineStyle::new()
                    .color(theme.grid_color.clone())
                    .width(theme.axis_width),
            ),
            x_axis: axis.clone(),
            y_axis: axis,
            spines: Spines {
                style: frame,
                ..Spines::default()
            },
            colorbar: None,
            aspect: Aspect::Auto,
            adjustable: Adjustable::Box,
            data_limits: Bounds::empty(),
            color_index: 0,
            theme,
        }
    }

    /// Set the position within the figure.
    pub fn position(mut self, left: f64, right: f64, bottom: f64, top: f64) -> Self {
        self.position = Bounds::new(left, right, bottom, top);
        self
    }

    /// Add a line plot.
    pub fn plot(&mut self, x: impl IntoPlotData, y: impl IntoPlotData) -> LinePlotBuilder<'_> {
        LinePlotBuilder {
            axes: self,
            plot: LinePlot::new(x.into_plot_data(), y.into_plot_data()),
            color: None,
        }
    }

    /// Add a scatter plot.
    pub fn scatter(
        &mut self,
        x: impl IntoPlotData,
        y: impl IntoPlotData,
    ) -> ScatterPlotBuilder<'_> {
        ScatterPlotBuilder {
            axes: self,
            plot: ScatterPlot::new(x.into_plot_data(), y.into_plot_data()),
            color: None,
        }
    }

    /// Add a horizontal line across the axes at data coordinate `y`.
    pub fn axhline(&mut self, y: f64, style: LineStyle) -> &mut Self {
        if y.is_finite() {
            self.data_limits.include_y(y);
        }
        self.plots
            .push(Box::new(AxLine::horizontal(y).line_style(style)));
        self
    }

    /// Add a vertical line across the axes at data coordinate `x`.
    pub fn axvline(&mut self, x: f64, style: LineStyle) -> &mut Self {
        if x.is_finite() {
            self.data_limits.include_x(x);
        }
        self.plots.push(Box::new(AxLine::vertical(x).line_style(style)));
        self
    }

    /// Set the x-axis label.
    pub fn set_xlabel(&mut self, label: impl Into<String>, font_size: f64) -> &mut Self {
        let style = self.theme.label_style.clone().font_size(font_size);
        self.x_label = Some(Text::new(label, 0.0, 0.0).style(style));
        self
    }

    /// Set the y-axis label.
    pub fn set_ylabel(&mut self, label: impl Into<String>, font_size: f64) -> &mut Self {
        let style = self.theme.label_style.clone().font_size(font_size);
        self.y_label = Some(Text::new(label, 0.0, 0.0).style(style));
        self
    }

    pub fn set_aspect(&mut self, aspect: Aspect, adjustable: Adjustable) -> &mut Self {
        self.aspect = aspect;
        self.adjustable = adjustable;
        self
    }

    pub fn aspect(&self) -> (Aspect, Adjustable) {
        (self.aspect, self.adjustable)
    }

    /// Show or hide grid lines at the given ticks, all drawn with `style`.
    pub fn grid(&mut self, visible: bool, which: GridWhich, style: LineStyle) -> &mut Self {
        self.grid = std::mem::take(&mut self.grid).style(style);
        self.grid.visible = visible;
        self.grid.which = which;
        self
    }

    /// Attach a colorbar to the right of the plot area.
    pub fn colorbar(&mut self, colorbar: Colorbar) -> &mut Self {
        self.colorbar = Some(colorbar);
        self
    }

    pub fn get_colorbar(&self) -> Option<&Colorbar> {
        self.colorbar.as_ref()
    }

    /// Add a plot to this axes.
    pub fn add_plot(&mut self, plot: Box<dyn Plot>) {
        if let Some(plot_bounds) = plot.bounds() {
            self.data_limits.include_bounds(&plot_bounds);
        }
        self.plots.push(plot);
    }

    /// All artists in insertion order.
    pub fn plots(&self) -> &[Box<dyn Plot>] {
        &self.plots
    }

    /// Artists of one concrete type, in insertion order.
    pub fn plots_of<T: Plot>(&self) -> impl Iterator<Item = &T> {
        self.plots
            .iter()
            .filter_map(|plot| plot.as_any().downcast_ref::<T>())
    }

    /// Get the next color from the cycle.
    pub(crate) fn next_color(&mut self) -> Color {
        let color = cycle_color(self.color_index);
        self.color_index += 1;
        color
    }

    /// Get the effective x range.
    fn get_x_range(&self) -> (f64, f64) {
        if self.data_limits.x_min <= self.data_limits.x_max {
            let scale = LinearScale::widened(self.data_limits.x_min, self.data_limits.x_max);
            let (min, max) = scale.range();
            let margin = scale.span() * DATA_MARGIN;
            (min - margin, max + margin)
        } else {
            (0.0, 1.0)
        }
    }

    /// Get the effective y range.
    fn get_y_range(&self) -> (f64, f64) {
        if self.data_limits.y_min <= self.data_limits.y_max {
            let scale = LinearScale::widened(self.data_limits.y_min, self.data_limits.y_max);
            let (min, max) = scale.range();
            let margin = scale.span() * DATA_MARGIN;
            (min - margin, max + margin)
        } else {
            (0.0, 1.0)
        }
    }

    /// Resolve pixel box, data limits and colorbar placement.
    pub fn layout(&self, figure_width: f64, figure_height: f64) -> AxesLayout {
        let region = Bounds::new(
            self.position.x_min * figure_width,
            self.position.x_max * figure_width,
            (1.0 - self.position.y_max) * figure_height,
            (1.0 - self.position.y_min) * figure_height,
        );

        // The colorbar takes a strip on the right; the plot keeps the rest minus the pad.
        let (mut pixel_bounds, colorbar_bounds) = match self.colorbar {
            Some(ref cb) => {
                let w = region.width();
                let slot_x = region.x_min + (1.0 - cb.fraction) * w;
                let bar_w = (cb.fraction * w).min(region.height() / 20.0);
                let parent = Bounds::new(
                    region.x_min,
                    region.x_min + (1.0 - cb.fraction - cb.pad) * w,
                    region.y_min,
                    region.y_max,
                );
                let bar = Bounds::new(slot_x, slot_x + bar_w, region.y_min, region.y_max);
                (parent, Some(bar))
            }
            None => (region, None),
        };

        let (x_min, x_max) = self.get_x_range();
        let (y_min, y_max) = self.get_y_range();
        let x_scale = LinearScale::widened(x_min, x_max);
        let y_scale = LinearScale::widened(y_min, y_max);
        let (x_min, x_max) = x_scale.range();
        let (y_min, y_max) = y_scale.range();
        let mut data_bounds = Bounds::new(x_min, x_max, y_min, y_max);

        if self.aspect == Aspect::Equal {
            let x_upp = data_bounds.width() / pixel_bounds.width();
            let y_upp = data_bounds.height() / pixel_bounds.height();
            match self.adjustable {
                Adjustable::Box => {
                    // Shrink the box along the axis with fewer units per pixel, keep it centered.
                    let upp = x_upp.max(y_upp);
                    let w = data_bounds.width() / upp;
                    let h = data_bounds.height() / upp;
                    let (cx, cy) = pixel_bounds.center();
                    debug!("Equal aspect box: {:.1}x{:.1} px", w, h);
                    pixel_bounds =
                        Bounds::new(cx - w / 2.0, cx + w / 2.0, cy - h / 2.0, cy + h / 2.0);
                }
                Adjustable::DataLim => {
                    let upp = x_upp.max(y_upp);
                    let (cx, cy) = data_bounds.center();
                    let half_w = upp * pixel_bounds.width() / 2.0;
                    let half_h = upp * pixel_bounds.height() / 2.0;
                    data_bounds = Bounds::new(cx - half_w, cx + half_w, cy - half_h, cy + half_h);
                }
            }
        }

        AxesLayout {
            pixel_bounds,
            data_bounds,
            x_scale: LinearScale::widened(data_bounds.x_min, data_bounds.x_max),
            y_scale: LinearScale::widened(data_bounds.y_min, data_bounds.y_max),
            colorbar_bounds,
        }
    }

    /// Render the axes to SVG.
    pub fn render_svg(&self, figure_width: f64, figure_height: f64) -> String {
        let mut svg = String::new();
        let layout = self.layout(figure_width, figure_height);
        let pixel_bounds = layout.pixel_bounds;
        let data_bounds = layout.data_bounds;

        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
            pixel_bounds.x_min,
            pixel_bounds.y_min,
            pixel_bounds.width(),
            pixel_bounds.height(),
            self.theme.plot_background.to_svg_string()
        ));

        let mut ordered: Vec<&dyn Plot> = self.plots.iter().map(|p| p.as_ref()).collect();
        // Stable, so equal zorders keep insertion order.
        ordered.sort_by(|a, b| a.zorder().total_cmp(&b.zorder()));
        let split = ordered.partition_point(|p| p.zorder() < GRID_ZORDER);

        let clip_id = format!(
            "plot-clip-{:.0}-{:.0}",
            pixel_bounds.x_min, pixel_bounds.y_min
        );
        svg.push_str(&format!(
            "<defs><clipPath id=\"{}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/></clipPath></defs>\n",
            clip_id, pixel_bounds.x_min, pixel_bounds.y_min, pixel_bounds.width(), pixel_bounds.height()
        ));

        svg.push_str(&format!("<g clip-path=\"url(#{})\">\n", clip_id));
        for plot in &ordered[..split] {
            svg.push_str(&plot.render_svg(&data_bounds, &pixel_bounds));
        }
        svg.push_str("</g>\n");

        if self.grid.visible {
            svg.push_str(&self.render_grid(&layout));
        }

        svg.push_str(&format!("<g clip-path=\"url(#{})\">\n", clip_id));
        for plot in &ordered[split..] {
            svg.push_str(&plot.render_svg(&data_bounds, &pixel_bounds));
        }
        svg.push_str("</g>\n");

        svg.push_str(&self.render_spines(&pixel_bounds));
        let widest_y_tick = {
            let (axes_svg, widest) = self.render_axes(&layout);
            svg.push_str(&axes_svg);
            widest
        };

        if let Some(ref label) = self.x_label {
            let tick_font = self.x_axis.tick_label_style.font_size;
            let y = pixel_bounds.y_max
                + self.x_axis.tick_length
                + self.x_axis.tick_padding
                + tick_font * 1.2
                + 4.0;
            let mut t = label.clone().at((pixel_bounds.x_min + pixel_bounds.x_max) / 2.0, y);
            t.style.anchor = TextAnchor::Middle;
            t.style.baseline = DominantBaseline::Hanging;
            svg.push_str(&t.to_svg());
            svg.push('\n');
        }

        if let Some(ref label) = self.y_label {
            let tick_font = self.y_axis.tick_label_style.font_size;
            let x = pixel_bounds.x_min
                - self.y_axis.tick_length
                - self.y_axis.tick_padding
                - widest_y_tick as f64 * tick_font * 0.6
                - 6.0;
            let mut t = label.clone().at(x, (pixel_bounds.y_min + pixel_bounds.y_max) / 2.0);
            t.style.anchor = TextAnchor::Middle;
            t.style.rotation = -90.0;
            svg.push_str(&t.to_svg());
            svg.push('\n');
        }

        if let (Some(cb), Some(bounds)) = (&self.colorbar, layout.colorbar_bounds) {
            svg.push_str(&cb.render_svg(&bounds, &self.theme.axis_color));
        }

        svg
    }

    fn render_grid(&self, layout: &AxesLayout) -> String {
        let mut svg = String::new();
        let pixel_bounds = &layout.pixel_bounds;

        let mut passes: Vec<(&LineStyle, Vec<f64>, Vec<f64>)> = Vec::new();
        if self.grid.which.major() {
            passes.push((
                &self.grid.major_style,
                self.x_tick_values(layout),
                self.y_tick_values(layout),
            ));
        }
        if self.grid.which.minor() {
            passes.push((
                &self.grid.minor_style,
                layout
                    .x_scale
                    .minor_ticks(self.x_axis.num_ticks, self.grid.minor_divisions),
                layout
                    .y_scale
                    .minor_ticks(self.y_axis.num_ticks, self.grid.minor_divisions),
            ));
        }

        for (style, x_ticks, y_ticks) in passes {
            let attrs = style.to_svg_style();
            if self.grid.show_x {
                for tick in x_ticks {
                    let px = pixel_bounds.x_min + layout.x_scale.transform(tick) * pixel_bounds.width();
                    svg.push_str(&format!(
                        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                        px, pixel_bounds.y_min, px, pixel_bounds.y_max, attrs
                    ));
                }
            }
            if self.grid.show_y {
                for tick in y_ticks {
                    let py = pixel_bounds.y_max - layout.y_scale.transform(tick) * pixel_bounds.height();
                    svg.push_str(&format!(
                        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                        pixel_bounds.x_min, py, pixel_bounds.x_max, py, attrs
                    ));
                }
            }
        }

        svg
    }

    fn render_spines(&self, pixel_bounds: &Bounds) -> String {
        let mut svg = String::new();
        let attrs = self.spines.style.to_svg_style();
        let sides = [
            (self.spines.bottom, pixel_bounds.x_min, pixel_bounds.y_max, pixel_bounds.x_max, pixel_bounds.y_max),
            (self.spines.top, pixel_bounds.x_min, pixel_bounds.y_min, pixel_bounds.x_max, pixel_bounds.y_min),
            (self.spines.left, pixel_bounds.x_min, pixel_bounds.y_min, pixel_bounds.x_min, pixel_bounds.y_max),
            (self.spines.right, pixel_bounds.x_max, pixel_bounds.y_min, pixel_bounds.x_max, pixel_bounds.y_max),
        ];
        for (visible, x1, y1, x2, y2) in sides {
            if visible {
                svg.push_str(&format!(
                    "<line class=\"spine\" x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                    x1, y1, x2, y2, attrs
                ));
            }
        }
        svg
    }

    fn x_tick_values(&self, layout: &AxesLayout) -> Vec<f64> {
        match self.x_axis.tick_positions {
            Some(ref positions) => positions.clone(),
            None => layout.x_scale.ticks(self.x_axis.num_ticks),
        }
    }

    fn y_tick_values(&self, layout: &AxesLayout) -> Vec<f64> {
        match self.y_axis.tick_positions {
            Some(ref positions) => positions.clone(),
            None => layout.y_scale.ticks(self.y_axis.num_ticks),
        }
    }

    /// Tick marks and labels. Also returns the widest y tick label in characters.
    fn render_axes(&self, layout: &AxesLayout) -> (String, usize) {
        let mut svg = String::new();
        let pixel_bounds = &layout.pixel_bounds;
        let mut widest = 0;

        if self.x_axis.show_ticks {
            let tick_attrs = self.x_axis.tick_style.to_svg_style();
            let label_attrs = self
                .x_axis
                .tick_label_style
                .clone()
                .anchor(TextAnchor::Middle)
                .baseline(DominantBaseline::Hanging)
                .to_svg_attrs();
            for tick in self.x_tick_values(layout) {
                let px = pixel_bounds.x_min + layout.x_scale.transform(tick) * pixel_bounds.width();
                svg.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                    px,
                    pixel_bounds.y_max,
                    px,
                    pixel_bounds.y_max + self.x_axis.tick_length,
                    tick_attrs
                ));
                svg.push_str(&format!(
                    "<text x=\"{:.2}\" y=\"{:.2}\" {}>{}</text>\n",
                    px,
                    pixel_bounds.y_max + self.x_axis.tick_length + self.x_axis.tick_padding,
                    label_attrs,
                    escape_xml(&self.x_axis.format_tick(tick))
                ));
            }
        }

        if self.y_axis.show_ticks {
            let tick_attrs = self.y_axis.tick_style.to_svg_style();
            let label_attrs = self
                .y_axis
                .tick_label_style
                .clone()
                .anchor(TextAnchor::End)
                .baseline(DominantBaseline::Middle)
                .to_svg_attrs();
            for tick in self.y_tick_values(layout) {
                let py = pixel_bounds.y_max - layout.y_scale.transform(tick) * pixel_bounds.height();
                let label = self.y_axis.format_tick(tick);
                widest = widest.max(label.chars().count());
                svg.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                    pixel_bounds.x_min - self.y_axis.tick_length,
                    py,
                    pixel_bounds.x_min,
                    py,
                    tick_attrs
                ));
                svg.push_str(&format!(
                    "<text x=\"{:.2}\" y=\"{:.2}\" {}>{}</text>\n",
                    pixel_bounds.x_min - self.y_axis.tick_length - self.y_axis.tick_padding,
                    py,
                    label_attrs,
                    escape_xml(&label)
                ));
            }
        }

        (svg, widest)
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

// Builder types for fluent API

/// Builder for line plots.
pub struct LinePlotBuilder<'a> {
    axes: &'a mut Axes,
    plot: LinePlot,
    color: Option<Color>,
}

impl<'a> LinePlotBuilder<'a> {
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn linewidth(mut self, width: f64) -> Self {
        self.plot = self.plot.linewidth(width);
        self
    }

    pub fn linestyle(mut self, style: DashPattern) -> Self {
        self.plot = self.plot.linestyle(style);
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.plot = self.plot.alpha(alpha);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.plot = self.plot.marker(marker);
        self
    }

    pub fn zorder(mut self, zorder: f64) -> Self {
        self.plot = self.plot.zorder(zorder);
        self
    }

    pub fn build(self) -> &'a mut Axes {
        let color = match self.color {
            Some(color) => color,
            None => self.axes.next_color(),
        };
        let plot = self.plot.color(color);
        self.axes.add_plot(Box::new(plot));
        self.axes
    }
}

/// Builder for scatter plots.
pub struct ScatterPlotBuilder<'a> {
    axes: &'a mut Axes,
    plot: ScatterPlot,
    color: Option<Color>,
}

impl<'a> ScatterPlotBuilder<'a> {
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Color each point by a scalar mapped through `cmap`.
    pub fn values(mut self, values: Vec<f64>, cmap: Colormap) -> Self {
        self.plot = self.plot.values(values, cmap);
        self
    }

    pub fn norm(mut self, norm: Normalize) -> Self {
        self.plot = self.plot.norm(norm);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.plot = self.plot.marker(marker);
        self
    }

    pub fn marker_style(mut self, style: MarkerStyle) -> Self {
        self.plot = self.plot.marker_style(style);
        self
    }

    pub fn zorder(mut self, zorder: f64) -> Self {
        self.plot = self.plot.zorder(zorder);
        self
    }

    pub fn build(self) -> &'a mut Axes {
        let mut plot = self.plot;
        if let Some(color) = self.color {
            plot = plot.color(color);
        } else if plot.values.is_none() {
            let color = self.axes.next_color();
            plot = plot.color(color);
        }
        self.axes.add_plot(Box::new(plot));
        self.axes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::style::{BoundaryNorm, Extend};

    #[test]
    fn test_axhline_only_extends_y() {
        let mut ax = Axes::new();
        ax.plot(vec![1.0, 2.0], vec![1.0, 2.0]).build();
        ax.axhline(0.0, LineStyle::new()).axvline(0.0, LineStyle::new());
        let layout = ax.layout(1000.0, 500.0);
        // Both lines pull their own axis down to 0; margins apply afterwards.
        assert!((layout.data_bounds.x_min - (-0.1)).abs() < 1e-9);
        assert!((layout.data_bounds.y_min - (-0.1)).abs() < 1e-9);

        let mut only_h = Axes::new();
        only_h.plot(vec![1.0, 2.0], vec![1.0, 2.0]).build();
        only_h.axhline(-5.0, LineStyle::new());
        let layout = only_h.layout(1000.0, 500.0);
        assert!((layout.data_bounds.x_min - 0.95).abs() < 1e-9);
        assert!(layout.data_bounds.y_min < -5.0);
    }

    #[test]
    fn test_equal_aspect_box_matches_units() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 10.0], vec![0.0, 2.0]).build();
        ax.set_aspect(Aspect::Equal, Adjustable::Box);
        let layout = ax.layout(1000.0, 500.0);
        assert!((layout.x_pixels_per_unit() - layout.y_pixels_per_unit()).abs() < 1e-9);

        let region_w = (0.9 - 0.125) * 1000.0;
        assert!((layout.pixel_bounds.width() - region_w).abs() < 1e-9);
        assert!(layout.pixel_bounds.height() < (0.88 - 0.11) * 500.0);
    }

    #[test]
    fn test_equal_aspect_datalim_keeps_box() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 1.0], vec![0.0, 1.0]).build();
        ax.set_aspect(Aspect::Equal, Adjustable::DataLim);
        let layout = ax.layout(1000.0, 500.0);
        assert!((layout.pixel_bounds.height() - 0.77 * 500.0).abs() < 1e-9);
        assert!((layout.x_pixels_per_unit() - layout.y_pixels_per_unit()).abs() < 1e-9);
    }

    #[test]
    fn test_colorbar_reserves_strip() {
        let cmap = Colormap::viridis();
        let norm = BoundaryNorm::new(vec![0.0, 1.0, 2.0], cmap.len(), Extend::Both).unwrap();
        let mut ax = Axes::new();
        ax.scatter(vec![0.0, 1.0], vec![0.0, 1.0]).build();
        ax.colorbar(Colorbar::new(cmap, norm));
        let layout = ax.layout(1000.0, 500.0);
        let bar = layout.colorbar_bounds.unwrap();
        assert!(bar.x_min > layout.pixel_bounds.x_max);
        assert!(bar.x_max <= 0.9 * 1000.0 + 1e-9);
    }

    #[test]
    fn test_render_orders_by_zorder() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 1.0], vec![0.0, 1.0])
            .color("#ff0000")
            .zorder(5.0)
            .build();
        ax.scatter(vec![0.5], vec![0.5]).color("#00ff00").zorder(0.0).build();
        let svg = ax.render_svg(1000.0, 500.0);
        let line_at = svg.find("rgb(255,0,0)").unwrap();
        let point_at = svg.find("rgb(0,255,0)").unwrap();
        assert!(point_at < line_at);
    }

    #[test]
    fn test_hidden_spines_and_minor_grid() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 10.0], vec![0.0, 10.0]).build();
        ax.spines.set_all_visible(false);
        ax.grid(
            true,
            GridWhich::Both,
            LineStyle::new().dash(DashPattern::Dashed).width(0.5),
        );
        let svg = ax.render_svg(1000.0, 500.0);
        assert!(!svg.contains("class=\"spine\""));
        // Majors at 0,2,..,10 and minors in between, on both axes.
        assert!(svg.matches("stroke-dasharray").count() >= 20);
    }

    #[test]
    fn test_plots_of_downcasts() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 1.0], vec![0.0, 1.0]).build();
        ax.scatter(vec![0.0], vec![0.0]).build();
        ax.axhline(0.0, LineStyle::new());
        assert_eq!(ax.plots().len(), 3);
        assert_eq!(ax.plots_of::<LinePlot>().count(), 1);
        assert_eq!(ax.plots_of::<ScatterPlot>().count(), 1);
        assert_eq!(ax.plots_of::<AxLine>().count(), 1);
    }
}
