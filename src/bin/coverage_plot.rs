use std::fs;
use std::path::PathBuf;

use clap::Parser;
use glide_planner::export::{Record, csv::read_records};
use glide_planner::primitives::units::km_to_deg;
use plotters::prelude::*;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render glide-range coverage of a landing plan from its CSV export"
)]
struct Cli {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "artifacts/coverage.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 1200)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
    /// Vertices used to draw each glide-range circle
    #[arg(long, default_value_t = 72)]
    circle_segments: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut records = read_records(&cli.input)?;
    records.sort_by_key(|r| r.sequence);

    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        return Err(anyhow::anyhow!("No landings in the provided CSV"));
    };
    let range_deg = km_to_deg(first.glide_range_km);
    if !range_deg.is_finite() || range_deg <= 0.0 {
        return Err(anyhow::anyhow!("CSV carries no usable glide range"));
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let (lon_min, lon_max, lat_min, lat_max) = bounds(&records, range_deg * 1.1);

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Emergency landing coverage: {} → {} ({} sites, {:.0} km glide range)",
                first.identifier,
                last.identifier,
                records.len(),
                first.glide_range_km
            ),
            caption_font,
        )
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(lon_min..lon_max, lat_min..lat_max)?;

    chart
        .configure_mesh()
        .x_desc("Longitude (deg)")
        .y_desc("Latitude (deg)")
        .label_style(label_font.clone())
        .x_labels(8)
        .y_labels(8)
        .draw()?;

    let coverage_color = RGBColor(30, 110, 200);
    for record in &records {
        let ring = circle_points(record, range_deg, cli.circle_segments.max(8));
        chart.draw_series(std::iter::once(Polygon::new(
            ring.clone(),
            coverage_color.mix(0.08).filled(),
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            ring,
            ShapeStyle::from(&coverage_color.mix(0.6)).stroke_width(1),
        )))?;
    }

    chart.draw_series(std::iter::once(PathElement::new(
        vec![
            (first.longitude, first.latitude),
            (last.longitude, last.latitude),
        ],
        ShapeStyle::from(&BLACK).stroke_width(2),
    )))?;

    let marker_color = RGBColor(210, 100, 20);
    chart.draw_series(records.iter().map(|r| {
        Circle::new(
            (r.longitude, r.latitude),
            5,
            ShapeStyle::from(&marker_color).filled(),
        )
    }))?;
    let label_offset = (lat_max - lat_min) * 0.015;
    chart.draw_series(records.iter().map(|r| {
        Text::new(
            format!("{} {}", r.identifier, r.passing_time),
            (r.longitude, r.latitude + label_offset),
            label_font.clone().color(&BLACK),
        )
    }))?;

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn bounds(records: &[Record], pad: f64) -> (f64, f64, f64, f64) {
    let mut lon_min = f64::INFINITY;
    let mut lon_max = f64::NEG_INFINITY;
    let mut lat_min = f64::INFINITY;
    let mut lat_max = f64::NEG_INFINITY;
    for r in records {
        lon_min = lon_min.min(r.longitude);
        lon_max = lon_max.max(r.longitude);
        lat_min = lat_min.min(r.latitude);
        lat_max = lat_max.max(r.latitude);
    }
    (lon_min - pad, lon_max + pad, lat_min - pad, lat_max + pad)
}

fn circle_points(record: &Record, radius_deg: f64, segments: usize) -> Vec<(f64, f64)> {
    (0..=segments)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / segments as f64;
            (
                record.longitude + radius_deg * angle.cos(),
                record.latitude + radius_deg * angle.sin(),
            )
        })
        .collect()
}
