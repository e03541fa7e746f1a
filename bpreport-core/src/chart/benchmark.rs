use crate::chart::backend::ChartKind;
use crate::chart::error::ChartError;
use crate::results::AccuracyTable;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const TITLE: &str = "Branch prediction accuracy by benchmark and scheme";

/// Slot positions for grouped bars on a segmented x axis.
///
/// Each benchmark owns `schemes + 1` consecutive slots: one per scheme and a
/// trailing gap that separates it from the next group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GroupLayout {
    benchmarks: u32,
    schemes: u32,
}

impl GroupLayout {
    pub(crate) fn new(benchmarks: usize, schemes: usize) -> Self {
        Self {
            benchmarks: benchmarks as u32,
            schemes: schemes as u32,
        }
    }

    fn stride(&self) -> u32 {
        self.schemes + 1
    }

    pub(crate) fn slots(&self) -> u32 {
        self.benchmarks * self.stride()
    }

    pub(crate) fn slot(&self, benchmark: usize, scheme: usize) -> u32 {
        benchmark as u32 * self.stride() + scheme as u32
    }

    /// Benchmark index whose group label sits at `slot`, if any.
    pub(crate) fn label_at(&self, slot: u32) -> Option<usize> {
        let group = slot / self.stride();
        (group < self.benchmarks && slot % self.stride() == self.schemes / 2)
            .then_some(group as usize)
    }
}

pub fn render_benchmark_chart(
    table: &AccuracyTable,
    path: &Path,
    size: (u32, u32),
) -> Result<(), ChartError> {
    if table.is_empty() {
        return Err(ChartError::NoData {
            chart: "accuracy by benchmark",
        });
    }

    match ChartKind::from_path(path) {
        #[cfg(feature = "png")]
        ChartKind::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw(&root, table).map_err(|e| ChartError::draw(path, e))
        }
        #[cfg(not(feature = "png"))]
        ChartKind::Png => Err(ChartError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
        ChartKind::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw(&root, table).map_err(|e| ChartError::draw(path, e))
        }
    }
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    table: &AccuracyTable,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let benchmarks: Vec<&str> = table.benchmarks().collect();
    let schemes: Vec<&str> = table.schemes().collect();
    let layout = GroupLayout::new(benchmarks.len(), schemes.len());

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..layout.slots()).into_segmented(), 0.0..100.0)?;

    let x_label = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(slot) => layout
            .label_at(*slot)
            .map(|b| benchmarks[b].to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(layout.slots() as usize + 1)
        .x_label_formatter(&x_label)
        .y_label_formatter(&|v| format!("{v:.0}"))
        .y_desc("Prediction accuracy (%)")
        .draw()?;

    for (s, scheme) in schemes.iter().enumerate() {
        let color = Palette99::pick(s).to_rgba();
        let bars = benchmarks
            .iter()
            .enumerate()
            .filter_map(|(b, benchmark)| {
                table
                    .get(benchmark, scheme)
                    .map(|accuracy| (SegmentValue::Exact(layout.slot(b, s)), accuracy))
            })
            .collect::<Vec<_>>();

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(color.filled())
                    .margin(1)
                    .data(bars),
            )?
            .label(*scheme)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()
}
