//! Phase-space plots of outgoing longwave radiation (OLR) against absorbed
//! shortwave radiation (ASR), rendered to SVG.

pub mod config;
pub mod example;
pub mod imbalance;
pub mod plotting;
pub mod series;

pub use imbalance::{
    colorbar_bin_edges, plot_radiative_imbalance, ImbalanceOptions, ImbalancePlot, StyleOverrides,
};
pub use series::TimeSeries;
