//! Plotting infrastructure for noise sweep rate charts
//!
//! This module renders the three normalized outcome series as overlaid
//! line charts using the [`plotters`] crate. Charts are saved as PNG
//! files with fixed 1200x800 resolution.
//!
//! # Headless Compatibility
//! Rendering uses plotters' bitmap backend so it works in headless
//! environments (Docker/CI) without a display server or system font
//! dependencies.

use crate::common::RateSeries;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Creates the overlaid rate chart and saves it as a PNG file
///
/// Draws one line per outcome series (corrupted, mismatched,
/// uncorrectable) against the fixed probability axis, with a legend
/// naming each series.
///
/// Every series must have exactly one entry per axis value. An empty
/// results file therefore fails here with [`PlotError::InvalidData`]
/// (0 entries against an 11-value axis) instead of silently rendering
/// a meaningless chart.
///
/// # Arguments
/// * `levels` - The bit flip probabilities forming the x-axis, ascending
/// * `rates` - The three normalized rate series
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If validation or rendering failed
///
/// # Chart Properties
/// * Resolution: 1200x800 pixels
/// * Format: PNG
/// * X-axis: bit flip probability, linear
/// * Y-axis: rate per block, from zero to the largest observed rate
///   (at least 1.0 so the three curves share a stable frame)
pub fn create_rates_plot(levels: &[f64], rates: &RateSeries, output_path: &Path) -> Result<()> {
    if levels.is_empty() {
        return Err(PlotError::InvalidData("Axis cannot be empty".to_string()));
    }

    if rates.mismatched.len() != rates.corrupted.len()
        || rates.uncorrectable.len() != rates.corrupted.len()
    {
        return Err(PlotError::InvalidData(format!(
            "Series lengths diverge: {} corrupted, {} mismatched, {} uncorrectable",
            rates.corrupted.len(),
            rates.mismatched.len(),
            rates.uncorrectable.len()
        )));
    }

    if rates.len() != levels.len() {
        return Err(PlotError::InvalidData(format!(
            "Expected {} entries per series (one per noise level), found {}",
            levels.len(),
            rates.len()
        )));
    }

    let root = BitMapBackend::new(output_path, (1200, 800));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let x_min = levels[0];
    let x_max = levels[levels.len() - 1];

    // Counts normally stay below their divisor, but the input format
    // does not promise that; grow the frame if a rate exceeds 1.
    let y_max = rates
        .corrupted
        .iter()
        .chain(rates.mismatched.iter())
        .chain(rates.uncorrectable.iter())
        .copied()
        .fold(1.0f64, f64::max);

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption("Hamming(8,4) Outcome Rates", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .x_desc("Bit Flip Probability")
        .x_label_style(("sans-serif", 35))
        .y_desc("Rate per Block")
        .y_label_style(("sans-serif", 35))
        .label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let series: [(&str, &[f64], RGBColor); 3] = [
        ("Corrupted", &rates.corrupted, RED),
        ("Mismatched", &rates.mismatched, BLUE),
        ("Uncorrectable", &rates.uncorrectable, GREEN),
    ];

    for (label, values, colour) in series {
        chart_context
            .draw_series(LineSeries::new(
                levels.iter().copied().zip(values.iter().copied()),
                &colour,
            ))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], colour));
    }

    chart_context
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
