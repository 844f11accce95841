//! Plot hand-off modules.

pub mod runner;

pub use runner::{invoke_plotter, PlotOptions};
