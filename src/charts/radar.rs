use std::f64::consts::TAU;
use std::path::Path;

use plotters::prelude::*;

use crate::charts::{FONT_FAMILY, SCORE_MAX, text_enabled};
use crate::error::PitchError;
use crate::model::scores::{ScoreSet, category_order};

/// Square canvas keeps the rings circular.
const RADAR_SIZE: (u32, u32) = (520, 520);
const RING_STEPS: u32 = 5;
const RING_SEGMENTS: usize = 72;
const LABEL_RADIUS: f64 = 110.0;
const EXTENT: f64 = 125.0;

/// `n` angles evenly spaced over a full turn, endpoint excluded.
pub fn radar_angles(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    (0..n).map(|i| TAU * i as f64 / n as f64).collect()
}

/// Polygon vertices for the score loop; the first vertex is repeated at the
/// end so the outline closes.
pub fn closed_loop(values: &[f64]) -> Vec<(f64, f64)> {
    let angles = radar_angles(values.len());
    let mut points = angles
        .iter()
        .zip(values)
        .map(|(&theta, &r)| polar(r, theta))
        .collect::<Vec<_>>();
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

pub fn polar(r: f64, theta: f64) -> (f64, f64) {
    (r * theta.cos(), r * theta.sin())
}

pub fn render_radar_chart(path: &Path, scores: &ScoreSet) -> Result<(), PitchError> {
    let categories = category_order();
    let values = scores
        .as_array()
        .iter()
        .map(|&v| f64::from(v))
        .collect::<Vec<_>>();
    let angles = radar_angles(categories.len());
    let text = text_enabled();

    let root = BitMapBackend::new(path, RADAR_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| PitchError::chart(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(-EXTENT..EXTENT, -EXTENT..EXTENT)
        .map_err(|e| PitchError::chart(path, e))?;

    chart
        .draw_series((1..=RING_STEPS).map(|step| {
            let r = SCORE_MAX * f64::from(step) / f64::from(RING_STEPS);
            PathElement::new(ring(r), BLACK.mix(0.2).stroke_width(1))
        }))
        .map_err(|e| PitchError::chart(path, e))?;

    chart
        .draw_series(angles.iter().map(|&theta| {
            PathElement::new(
                vec![(0.0, 0.0), polar(SCORE_MAX, theta)],
                BLACK.mix(0.2).stroke_width(1),
            )
        }))
        .map_err(|e| PitchError::chart(path, e))?;

    let outline = closed_loop(&values);
    chart
        .draw_series(std::iter::once(Polygon::new(
            outline.clone(),
            BLUE.mix(0.25).filled(),
        )))
        .map_err(|e| PitchError::chart(path, e))?;
    chart
        .draw_series(std::iter::once(PathElement::new(
            outline,
            BLUE.stroke_width(2),
        )))
        .map_err(|e| PitchError::chart(path, e))?;

    if text {
        chart
            .draw_series(categories.iter().zip(&angles).map(|(category, &theta)| {
                Text::new(
                    category.chart_label().to_string(),
                    polar(LABEL_RADIUS, theta),
                    (FONT_FAMILY, 16).into_font(),
                )
            }))
            .map_err(|e| PitchError::chart(path, e))?;
    }

    root.present().map_err(|e| PitchError::chart(path, e))?;
    Ok(())
}

fn ring(r: f64) -> Vec<(f64, f64)> {
    (0..=RING_SEGMENTS)
        .map(|i| polar(r, TAU * i as f64 / RING_SEGMENTS as f64))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/radar.rs"]
mod tests;
