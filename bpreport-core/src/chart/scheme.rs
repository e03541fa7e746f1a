use crate::chart::backend::ChartKind;
use crate::chart::error::ChartError;
use crate::results::SchemeSummary;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const TITLE: &str = "Geometric mean accuracy per scheme";

pub fn render_scheme_chart(
    summary: &SchemeSummary,
    path: &Path,
    size: (u32, u32),
) -> Result<(), ChartError> {
    if summary.is_empty() {
        return Err(ChartError::NoData {
            chart: "accuracy by scheme",
        });
    }

    match ChartKind::from_path(path) {
        #[cfg(feature = "png")]
        ChartKind::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw(&root, summary).map_err(|e| ChartError::draw(path, e))
        }
        #[cfg(not(feature = "png"))]
        ChartKind::Png => Err(ChartError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
        ChartKind::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw(&root, summary).map_err(|e| ChartError::draw(path, e))
        }
    }
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    summary: &SchemeSummary,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let schemes: Vec<(&str, f64)> = summary.iter().collect();
    let slots = schemes.len() as u32;

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..slots).into_segmented(), 0.0..100.0)?;

    let x_label = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(i) => schemes
            .get(*i as usize)
            .map(|(scheme, _)| scheme.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots as usize + 1)
        .x_label_formatter(&x_label)
        .y_label_formatter(&|v| format!("{v:.0}"))
        .y_desc("Geometric mean accuracy (%)")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(0.7).filled())
            .margin(8)
            .data(
                schemes
                    .iter()
                    .enumerate()
                    .map(|(i, (_, mean))| (SegmentValue::Exact(i as u32), *mean)),
            ),
    )?;

    let value_style = TextStyle::from(("sans-serif", 14).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    chart.draw_series(schemes.iter().enumerate().map(|(i, (_, mean))| {
        Text::new(
            format!("{mean:.1}"),
            (SegmentValue::CenterOf(i as u32), (mean + 1.0).min(100.0)),
            value_style.clone(),
        )
    }))?;

    root.present()
}
