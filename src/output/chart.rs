//! Bar chart of usable hosts per subnet.

use super::summary::read_summary;
use crate::models::SummaryRecord;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (1000, 600);
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Read a written summary from `summary_path` and plot it to `output_path`.
pub fn plot_hosts(summary_path: &Path, output_path: &Path) -> Result<(), Box<dyn Error>> {
    let records = read_summary(summary_path)?;
    draw_hosts_chart(&records, output_path)?;
    log::info!("→ Saved chart to {}", output_path.display());
    Ok(())
}

/// Render one bar per record, labelled "<network><cidr>", as an SVG file.
pub fn draw_hosts_chart(
    records: &[SummaryRecord],
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let labels: Vec<String> = records.iter().map(|r| r.label()).collect();
    let bars = records.len().max(1);
    let y_max = records
        .iter()
        .map(|r| r.total_usable_hosts)
        .max()
        .unwrap_or(0);
    let y_top = (y_max + y_max / 10).max(1);

    let root = SVGBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Hosts per Subnet", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(110)
        .y_label_area_size(90)
        .build_cartesian_2d((0..bars).into_segmented(), 0u64..y_top)?;

    let label_of = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Usable Hosts")
        .x_labels(bars + 1)
        .x_label_formatter(&label_of)
        .x_label_style(
            ("sans-serif", 12)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()?;

    chart.draw_series(records.iter().enumerate().map(|(i, r)| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0),
                (SegmentValue::Exact(i + 1), r.total_usable_hosts),
            ],
            BAR_COLOR.filled(),
        );
        bar.set_margin(0, 0, 6, 6);
        bar
    }))?;

    root.present()?;
    Ok(())
}
