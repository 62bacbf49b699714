use std::path::Path;

use plotters::prelude::*;

use crate::charts::{CHART_SIZE, FONT_FAMILY, SCORE_MAX, text_enabled};
use crate::error::PitchError;
use crate::model::scores::{Category, ScoreSet, category_order};

pub const BAR_TITLE: &str = "Pitch Score Breakdown";

const BAR_INSET: f64 = 0.15;

/// Vertical bar per category on a fixed 0..100 axis.
pub fn render_bar_chart(path: &Path, scores: &ScoreSet) -> Result<(), PitchError> {
    let categories = category_order();
    let n = categories.len() as f64;
    let text = text_enabled();

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| PitchError::chart(path, e))?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if text {
        builder
            .caption(BAR_TITLE, (FONT_FAMILY, 24))
            .x_label_area_size(40)
            .y_label_area_size(40);
    }
    let mut chart = builder
        .build_cartesian_2d(0f64..n, 0f64..SCORE_MAX)
        .map_err(|e| PitchError::chart(path, e))?;

    if text {
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(categories.len() * 2)
            .x_label_formatter(&|x| {
                category_at(*x)
                    .map(Category::chart_label)
                    .unwrap_or("")
                    .to_string()
            })
            .y_labels(6)
            .draw()
            .map_err(|e| PitchError::chart(path, e))?;
    } else {
        chart
            .draw_series((0..=5).map(|step| {
                let y = f64::from(step) * SCORE_MAX / 5.0;
                PathElement::new(vec![(0.0, y), (n, y)], BLACK.mix(0.15).stroke_width(1))
            }))
            .map_err(|e| PitchError::chart(path, e))?;
    }

    chart
        .draw_series(categories.iter().enumerate().map(|(i, &category)| {
            let x = i as f64;
            let value = f64::from(scores.get(category));
            Rectangle::new(
                [(x + BAR_INSET, 0.0), (x + 1.0 - BAR_INSET, value)],
                BLUE.filled(),
            )
        }))
        .map_err(|e| PitchError::chart(path, e))?;

    root.present().map_err(|e| PitchError::chart(path, e))?;
    Ok(())
}

/// Maps a mesh key point to the category whose bar is centred on it.
pub fn category_at(x: f64) -> Option<Category> {
    let slot = x.floor();
    if slot < 0.0 || (x - slot - 0.5).abs() > 1e-6 {
        return None;
    }
    category_order().get(slot as usize).copied()
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/bar.rs"]
mod tests;
