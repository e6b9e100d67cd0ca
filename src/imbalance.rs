//! OLR versus ASR phase-space plot.
//!
//! Draws one trajectory per call: a faint line through the points in time
//! order, markers colored by their position in the sequence, a dashed 1:1
//! reference line where the two fluxes balance, and a binned colorbar for
//! the time coordinate.

use log::{debug, warn};
use serde::Deserialize;

use crate::plotting::axes::{Adjustable, Aspect, Axes};
use crate::plotting::element::Colorbar;
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::figure::{Figure, DEFAULT_DPI, DEFAULT_SIZE_INCHES};
use crate::plotting::style::{
    BoundaryNorm, Color, Colormap, DashPattern, Extend, Marker, MarkerStyle, Normalize,
};
use crate::series::TimeSeries;

pub const OLR_LABEL: &str = "OLR (W·m⁻²)";
pub const ASR_LABEL: &str = "ASR (W·m⁻²)";
pub const COLORBAR_LABEL: &str = "Time";

const REFERENCE_ZORDER: f64 = 0.0;
const TRAJECTORY_ZORDER: f64 = 5.0;
const MARKER_ZORDER: f64 = 10.0;

/// Marker overrides for the scatter overlay.
///
/// Every field is optional; unset fields keep the scatter defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    pub marker: Option<Marker>,
    /// Dash pattern of the marker edges
    pub linestyle: Option<DashPattern>,
    /// Marker area in points squared
    pub size: Option<f64>,
    pub alpha: Option<f64>,
    /// Marker edge width
    pub linewidth: Option<f64>,
}

impl StyleOverrides {
    pub fn apply(&self, style: &mut MarkerStyle) {
        if let Some(marker) = self.marker {
            style.marker = marker;
        }
        if let Some(dash) = self.linestyle {
            style.edge_dash = dash;
        }
        if let Some(area) = self.size {
            style.size = area.max(0.0).sqrt();
        }
        if let Some(alpha) = self.alpha {
            style.fill_opacity = alpha.clamp(0.0, 1.0);
        }
        if let Some(width) = self.linewidth {
            style.edge_width = width;
        }
    }
}

/// Options for [`plot_radiative_imbalance`].
#[derive(Debug, Clone, PartialEq)]
pub struct ImbalanceOptions {
    pub style: StyleOverrides,
    /// Axis label size in pixels
    pub font_size: f64,
    pub colormap: Colormap,
}

impl Default for ImbalanceOptions {
    fn default() -> Self {
        ImbalanceOptions {
            style: StyleOverrides::default(),
            font_size: 14.0,
            colormap: Colormap::viridis(),
        }
    }
}

enum Surface<'a> {
    Created(Figure),
    Borrowed(&'a mut Axes),
}

/// The axes that was drawn into, plus the figure when one was created.
pub struct ImbalancePlot<'a> {
    surface: Surface<'a>,
}

impl<'a> ImbalancePlot<'a> {
    pub fn axes(&self) -> &Axes {
        match &self.surface {
            // A created figure always holds exactly the one axes drawn into.
            Surface::Created(figure) => &figure.axes()[0],
            Surface::Borrowed(axes) => &**axes,
        }
    }

    pub fn axes_mut(&mut self) -> &mut Axes {
        match &mut self.surface {
            Surface::Created(figure) => &mut figure.axes_mut()[0],
            Surface::Borrowed(axes) => &mut **axes,
        }
    }

    /// The new figure, if the call created one.
    pub fn figure(&self) -> Option<&Figure> {
        match &self.surface {
            Surface::Created(figure) => Some(figure),
            Surface::Borrowed(_) => None,
        }
    }

    pub fn into_figure(self) -> Option<Figure> {
        match self.surface {
            Surface::Created(figure) => Some(figure),
            Surface::Borrowed(_) => None,
        }
    }
}

/// Colorbar bin edges over the time coordinate of `series`.
///
/// Edges start at the earliest time and advance by `max(1, N / 10)` while
/// below the latest time plus one. The edges plus both extension regions
/// must fit in `ncolors`.
pub fn colorbar_bin_edges(series: &TimeSeries, ncolors: usize) -> PlotResult<Vec<f64>> {
    let Some((start, end)) = series.time_range() else {
        return Ok(Vec::new());
    };
    if !start.is_finite() || !end.is_finite() {
        return Err(PlotError::InvalidData(format!(
            "time coordinate spans [{}, {}]",
            start, end
        )));
    }
    let step = (series.len() / 10).max(1) as f64;
    let count = ((end + 1.0 - start) / step).ceil().max(0.0);
    if count + 1.0 > ncolors as f64 {
        return Err(PlotError::InvalidConfig(format!(
            "{} regions do not fit in a colormap with {} colors",
            count + 1.0,
            ncolors
        )));
    }
    Ok((0..count as usize).map(|i| start + i as f64 * step).collect())
}

/// Plot ASR against OLR as a time-colored trajectory.
///
/// Draws into `target` when given, otherwise into a new 10×5 inch figure.
/// Both series must have the same, non-zero length; this is checked before
/// anything is drawn.
pub fn plot_radiative_imbalance<'a>(
    olr: &TimeSeries,
    asr: &TimeSeries,
    target: Option<&'a mut Axes>,
    options: &ImbalanceOptions,
) -> PlotResult<ImbalancePlot<'a>> {
    if olr.len() != asr.len() {
        return Err(PlotError::shape_mismatch("ASR", olr.len(), asr.len()));
    }
    if olr.is_empty() {
        return Err(PlotError::EmptyData);
    }
    let (Some(olr_min), Some(olr_max), Some(asr_min), Some(asr_max)) =
        (olr.min(), olr.max(), asr.min(), asr.max())
    else {
        return Err(PlotError::InvalidData(
            "series contain no comparable values".to_string(),
        ));
    };

    let edges = colorbar_bin_edges(olr, options.colormap.len())?;
    if edges.is_empty() {
        return Err(PlotError::InvalidData(
            "time coordinate has no comparable values".to_string(),
        ));
    }
    debug!("Colorbar edges: {:?}", edges);
    let norm = boundary_norm(edges, olr.len(), &options.colormap)?;

    let mut surface = match target {
        Some(axes) => Surface::Borrowed(axes),
        None => {
            let mut figure = Figure::from_inches(
                DEFAULT_SIZE_INCHES.0,
                DEFAULT_SIZE_INCHES.1,
                DEFAULT_DPI,
            );
            figure.add_subplot(1, 1, 1);
            Surface::Created(figure)
        }
    };
    let ax = match &mut surface {
        Surface::Created(figure) => &mut figure.axes_mut()[0],
        Surface::Borrowed(axes) => &mut **axes,
    };

    let n = olr.len();
    debug!("Plotting {} points", n);

    ax.plot(olr.values(), asr.values())
        .color(Color::BLACK)
        .alpha(0.5)
        .linewidth(0.5)
        .zorder(TRAJECTORY_ZORDER)
        .build();

    let mut marker_style = MarkerStyle::default();
    options.style.apply(&mut marker_style);
    let order: Vec<f64> = (0..n).map(|i| i as f64).collect();
    ax.scatter(olr.values(), asr.values())
        .values(order, options.colormap.clone())
        .norm(Normalize::new(0.0, (n - 1) as f64))
        .marker_style(marker_style)
        .zorder(MARKER_ZORDER)
        .build();

    ax.colorbar(Colorbar::new(options.colormap.clone(), norm).label(COLORBAR_LABEL));

    let lo = olr_min.min(asr_min);
    let hi = olr_max.max(asr_max);
    debug!("1:1 reference from {} to {}", lo, hi);
    ax.plot(vec![lo, hi], vec![lo, hi])
        .color("grey")
        .linestyle(DashPattern::Dashed)
        .zorder(REFERENCE_ZORDER)
        .build();

    ax.set_aspect(Aspect::Equal, Adjustable::Box);
    ax.set_xlabel(OLR_LABEL, options.font_size);
    ax.set_ylabel(ASR_LABEL, options.font_size);

    Ok(ImbalancePlot { surface })
}

fn boundary_norm(mut edges: Vec<f64>, n: usize, cmap: &Colormap) -> PlotResult<BoundaryNorm> {
    if edges.len() == 1 {
        // A single edge bounds no region; close it one step later.
        let step = (n / 10).max(1) as f64;
        warn!(
            "Only one colorbar edge at {}, extending to {}",
            edges[0],
            edges[0] + step
        );
        edges.push(edges[0] + step);
    }
    BoundaryNorm::new(edges, cmap.len(), Extend::Both)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::plot::{LinePlot, ScatterPlot};
    use crate::plotting::style::LutIndex;

    fn series(values: &[f64]) -> TimeSeries {
        TimeSeries::indexed(values.to_vec())
    }

    #[test]
    fn test_scenario_small_trajectory() {
        let olr = series(&[0.0, 1.0, 2.0]);
        let asr = series(&[0.0, 1.0, 4.0]);
        let plot = plot_radiative_imbalance(&olr, &asr, None, &ImbalanceOptions::default())
            .unwrap();
        let ax = plot.axes();

        let lines: Vec<&LinePlot> = ax.plots_of::<LinePlot>().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].points(), vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
        assert_eq!(lines[0].zorder, 5.0);
        assert_eq!(lines[0].line_style.color, Color::BLACK);
        assert_eq!(lines[0].line_style.width, 0.5);
        assert_eq!(lines[0].line_style.opacity, 0.5);
        assert!(lines[0].marker_style.is_none());

        // 1:1 reference
        assert_eq!(lines[1].points(), vec![(0.0, 0.0), (4.0, 4.0)]);
        assert_eq!(lines[1].zorder, 0.0);
        assert_eq!(lines[1].line_style.dash, DashPattern::Dashed);

        let scatter: Vec<&ScatterPlot> = ax.plots_of::<ScatterPlot>().collect();
        assert_eq!(scatter.len(), 1);
        assert_eq!(scatter[0].zorder, 10.0);
        assert_eq!(scatter[0].points(), vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
        let cmap = Colormap::viridis();
        assert_eq!(
            scatter[0].point_colors(),
            vec![cmap.eval(0.0), cmap.eval(0.5), cmap.eval(1.0)]
        );
    }

    #[test]
    fn test_scenario_mismatched_lengths() {
        let olr = series(&[0.0, 1.0]);
        let asr = series(&[0.0, 1.0, 2.0]);
        let err = plot_radiative_imbalance(&olr, &asr, None, &ImbalanceOptions::default())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            PlotError::ShapeMismatch {
                expected: 2,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_mismatch_leaves_target_untouched() {
        let mut fig = Figure::default();
        let ax = fig.gca();
        assert!(plot_radiative_imbalance(
            &series(&[0.0]),
            &series(&[0.0, 1.0]),
            Some(ax),
            &ImbalanceOptions::default(),
        )
        .is_err());
        assert!(fig.axes()[0].plots().is_empty());
        assert!(fig.axes()[0].get_colorbar().is_none());
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = plot_radiative_imbalance(
            &series(&[]),
            &series(&[]),
            None,
            &ImbalanceOptions::default(),
        );
        assert!(matches!(result, Err(PlotError::EmptyData)));
    }

    #[test]
    fn test_scenario_twenty_points_bins() {
        let time = TimeSeries::indexed(vec![0.0; 20]);
        let edges = colorbar_bin_edges(&time, 256).unwrap();
        assert_eq!(
            edges,
            vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0]
        );
    }

    #[test]
    fn test_bin_edge_count_formula() {
        for n in [1usize, 5, 9, 10, 11, 25, 99, 100, 137] {
            let time: Vec<f64> = (0..n).map(|i| i as f64 + 3.0).collect();
            let step = (n / 10).max(1) as f64;
            let expected = ((time[n - 1] + 1.0 - time[0]) / step).ceil() as usize;
            let series = TimeSeries::new(vec![0.0; n], time).unwrap();
            let edges = colorbar_bin_edges(&series, 256).unwrap();
            assert_eq!(edges.len(), expected, "n = {}", n);
            assert_eq!(edges[0], 3.0);
        }
        assert!(colorbar_bin_edges(&series(&[]), 256).unwrap().is_empty());
    }

    #[test]
    fn test_non_finite_time_rejected() {
        let series = TimeSeries::new(vec![0.0, 1.0], vec![0.0, f64::INFINITY]).unwrap();
        let result = plot_radiative_imbalance(&series, &series, None, &ImbalanceOptions::default());
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn test_wide_time_span_rejected() {
        for end in [1000.0, 1e12] {
            let series = TimeSeries::new(vec![0.0, 1.0], vec![0.0, end]).unwrap();
            let result =
                plot_radiative_imbalance(&series, &series, None, &ImbalanceOptions::default());
            assert!(
                matches!(result, Err(PlotError::InvalidConfig(_))),
                "end = {}",
                end
            );
        }
    }

    #[test]
    fn test_all_nan_time_rejected() {
        let series = TimeSeries::new(vec![0.0, 1.0], vec![f64::NAN, f64::NAN]).unwrap();
        let result = plot_radiative_imbalance(&series, &series, None, &ImbalanceOptions::default());
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn test_colorbar_extends_both_ways() {
        let olr = TimeSeries::indexed((0..20).map(|i| i as f64 * 0.5).collect());
        let asr = TimeSeries::indexed(olr.values().iter().map(|v| 0.5 * v * v).collect());
        let plot = plot_radiative_imbalance(&olr, &asr, None, &ImbalanceOptions::default())
            .unwrap();
        let cb = plot.axes().get_colorbar().unwrap();
        assert_eq!(cb.label.as_deref(), Some("Time"));
        assert_eq!(cb.norm.extend(), Extend::Both);
        assert_eq!(cb.norm.n_regions(), 9);
        assert_eq!(cb.norm.index(-1.0), LutIndex::Under);
        assert_eq!(cb.norm.index(18.0), LutIndex::Over);
        assert!(cb.under_cap().is_some());
        assert!(cb.over_cap().is_some());
    }

    #[test]
    fn test_equal_aspect_after_call() {
        let olr = series(&[0.0, 1.0, 2.0]);
        let asr = series(&[0.0, 1.0, 4.0]);
        let plot = plot_radiative_imbalance(&olr, &asr, None, &ImbalanceOptions::default())
            .unwrap();
        let figure = plot.figure().unwrap();
        assert_eq!((figure.width, figure.height), (1000.0, 500.0));
        assert_eq!(plot.axes().aspect(), (Aspect::Equal, Adjustable::Box));
        let layout = plot.axes().layout(figure.width, figure.height);
        let ratio = layout.x_pixels_per_unit() / layout.y_pixels_per_unit();
        assert!((ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_labels_use_font_size() {
        let options = ImbalanceOptions {
            font_size: 20.0,
            ..Default::default()
        };
        let plot =
            plot_radiative_imbalance(&series(&[1.0, 2.0]), &series(&[2.0, 1.0]), None, &options)
                .unwrap();
        let x_label = plot.axes().x_label.as_ref().unwrap();
        let y_label = plot.axes().y_label.as_ref().unwrap();
        assert_eq!(x_label.content, OLR_LABEL);
        assert_eq!(y_label.content, ASR_LABEL);
        assert_eq!(x_label.style.font_size, 20.0);
    }

    #[test]
    fn test_draws_into_caller_axes() {
        let mut fig = Figure::default();
        {
            let ax = fig.gca();
            let plot = plot_radiative_imbalance(
                &series(&[0.0, 1.0]),
                &series(&[1.0, 0.0]),
                Some(ax),
                &ImbalanceOptions::default(),
            )
            .unwrap();
            assert!(plot.figure().is_none());
            assert_eq!(plot.axes().plots().len(), 3);
        }
        assert_eq!(fig.axes().len(), 1);
        assert!(fig.axes()[0].get_colorbar().is_some());
    }

    #[test]
    fn test_single_point() {
        let plot = plot_radiative_imbalance(
            &series(&[3.0]),
            &series(&[5.0]),
            None,
            &ImbalanceOptions::default(),
        )
        .unwrap();
        let ax = plot.axes();
        let scatter = ax.plots_of::<ScatterPlot>().next().unwrap();
        assert_eq!(scatter.point_colors(), vec![Colormap::viridis().eval(0.0)]);
        let reference = ax.plots_of::<LinePlot>().nth(1).unwrap();
        assert_eq!(reference.points(), vec![(3.0, 3.0), (5.0, 5.0)]);
        assert_eq!(ax.get_colorbar().unwrap().norm.boundaries(), &[0.0, 1.0]);
        let svg = plot.into_figure().unwrap().render();
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn test_style_overrides_reach_markers_only() {
        let style: StyleOverrides =
            serde_json::from_str(r#"{"marker": "s", "linestyle": "--", "size": 64}"#).unwrap();
        let options = ImbalanceOptions {
            style,
            ..Default::default()
        };
        let plot = plot_radiative_imbalance(
            &series(&[0.0, 1.0]),
            &series(&[0.0, 1.0]),
            None,
            &options,
        )
        .unwrap();
        let scatter = plot.axes().plots_of::<ScatterPlot>().next().unwrap();
        assert_eq!(scatter.marker_style.marker, Marker::Square);
        assert_eq!(scatter.marker_style.edge_dash, DashPattern::Dashed);
        assert_eq!(scatter.marker_style.size, 8.0);
        let line = plot.axes().plots_of::<LinePlot>().next().unwrap();
        assert_eq!(line.line_style.dash, DashPattern::Solid);
    }

    #[test]
    fn test_unknown_override_rejected() {
        assert!(serde_json::from_str::<StyleOverrides>(r#"{"glow": true}"#).is_err());
    }

    #[test]
    fn test_custom_colormap() {
        let cmap = Colormap::listed(
            "two",
            vec![
                Color::rgb(255, 0, 0),
                Color::rgb(0, 255, 0),
                Color::rgb(0, 0, 255),
            ],
        )
        .unwrap();
        let options = ImbalanceOptions {
            colormap: cmap,
            ..Default::default()
        };
        let plot = plot_radiative_imbalance(
            &series(&[0.0, 1.0]),
            &series(&[0.0, 1.0]),
            None,
            &options,
        )
        .unwrap();
        let scatter = plot.axes().plots_of::<ScatterPlot>().next().unwrap();
        assert_eq!(
            scatter.point_colors(),
            vec![Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)]
        );
    }
}
