//! Synthetic demo dataset and the decoration applied on top of the plot.

use log::info;

use crate::imbalance::{plot_radiative_imbalance, ImbalanceOptions, StyleOverrides};
use crate::plotting::axes::Axes;
use crate::plotting::element::GridWhich;
use crate::plotting::error::PlotResult;
use crate::plotting::figure::Figure;
use crate::plotting::style::{Color, DashPattern, LineStyle, Marker};
use crate::series::TimeSeries;

/// Number of samples in the demo trajectory.
pub const SAMPLE_COUNT: usize = 20;

/// OLR from 0 to 9.5 in steps of 0.5, ASR = 0.5 * OLR², both tagged `0..20`.
pub fn synthetic_series() -> (TimeSeries, TimeSeries) {
    let olr: Vec<f64> = (0..SAMPLE_COUNT).map(|i| i as f64 * 0.5).collect();
    let asr = olr.iter().map(|v| 0.5 * v * v).collect();
    (TimeSeries::indexed(olr), TimeSeries::indexed(asr))
}

/// Marker style used by the demo.
pub fn example_style() -> StyleOverrides {
    StyleOverrides {
        marker: Some(Marker::Circle),
        linestyle: Some(DashPattern::Solid),
        ..Default::default()
    }
}

/// Hide the frame, draw the origin axes and a dashed grid.
pub fn decorate_axes(ax: &mut Axes) {
    ax.spines.set_all_visible(false);
    let origin = LineStyle::new().color(Color::GRAY).width(1.5);
    ax.axhline(0.0, origin.clone());
    ax.axvline(0.0, origin);
    ax.grid(
        true,
        GridWhich::Both,
        LineStyle::new()
            .color(Color::LIGHT_GRAY)
            .width(0.5)
            .dash(DashPattern::Dashed),
    );
}

/// Build the decorated demo figure.
pub fn build_example_figure(options: &ImbalanceOptions, size_px: (f64, f64)) -> PlotResult<Figure> {
    let (olr, asr) = synthetic_series();
    let mut figure = Figure::new(size_px.0, size_px.1);
    {
        let mut plot = plot_radiative_imbalance(&olr, &asr, Some(figure.gca()), options)?;
        decorate_axes(plot.axes_mut());
    }
    info!(
        "Plotted {} samples from OLR {:?} to {:?}",
        olr.len(),
        olr.min(),
        olr.max()
    );
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::plot::{AxLine, AxLineOrientation, ScatterPlot};

    #[test]
    fn test_synthetic_series_shape() {
        let (olr, asr) = synthetic_series();
        assert_eq!(olr.len(), 20);
        assert_eq!(olr.values()[19], 9.5);
        assert_eq!(asr.values()[2], 0.5);
        assert_eq!(asr.time(), olr.time());
        assert_eq!(olr.time()[19], 19.0);
    }

    #[test]
    fn test_decorations_applied() {
        let options = ImbalanceOptions {
            style: example_style(),
            ..Default::default()
        };
        let figure = build_example_figure(&options, (1000.0, 500.0)).unwrap();
        let ax = &figure.axes()[0];
        assert!(!ax.spines.any_visible());
        assert!(ax.grid.visible);
        assert_eq!(ax.grid.which, GridWhich::Both);
        assert_eq!(ax.grid.major_style.dash, DashPattern::Dashed);

        let lines: Vec<&AxLine> = ax.plots_of::<AxLine>().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].orientation, AxLineOrientation::Horizontal);
        assert_eq!(lines[1].orientation, AxLineOrientation::Vertical);
        assert!(lines.iter().all(|l| l.at == 0.0 && l.line_style.width == 1.5));

        let scatter = ax.plots_of::<ScatterPlot>().next().unwrap();
        assert_eq!(scatter.marker_style.marker, Marker::Circle);
        assert_eq!(scatter.x.len(), 20);
    }

    #[test]
    fn test_rendered_svg_has_every_marker() {
        let figure = build_example_figure(&ImbalanceOptions::default(), (1000.0, 500.0)).unwrap();
        let svg = figure.render();
        assert_eq!(svg.matches("<circle").count(), 20);
        assert!(svg.contains(">Time</text>"));
        assert!(svg.contains("OLR (W·m⁻²)"));
    }
}
