//! Export helpers for text, CSV, and JSON renderings of a landing plan.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::NaiveDateTime;
use glide_route::{FlightPlan, PlannedLanding};
use serde::{Deserialize, Serialize};

/// Clock format of passing times.
pub const TIME_FORMAT: &str = "%H:%M:%S";
/// Timestamp format used in CSV and JSON exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Flat export row for one landing of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub sequence: usize,
    pub identifier: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub passing_time: String,
    pub passing_at: String,
    pub day_offset: i64,
    pub along_route_km: f64,
    pub glide_range_km: f64,
}

impl Record {
    pub fn from_landing(index: usize, landing: &PlannedLanding, plan: &FlightPlan) -> Self {
        let airport = &landing.airport;
        let departure = plan.parameters.departure();
        Self {
            sequence: index,
            identifier: airport.ident.clone(),
            city: airport.city.clone(),
            country: airport.country.clone(),
            latitude: airport.latitude(),
            longitude: airport.longitude(),
            passing_time: landing.passing.at.format(TIME_FORMAT).to_string(),
            passing_at: landing.passing.at.format(TIMESTAMP_FORMAT).to_string(),
            day_offset: landing.passing.day_offset(departure),
            along_route_km: landing.passing.along_route_km,
            glide_range_km: plan.parameters.glide_range_km(),
        }
    }
}

/// Export rows in sequence order.
pub fn records(plan: &FlightPlan) -> Vec<Record> {
    plan.landings
        .iter()
        .enumerate()
        .map(|(idx, landing)| Record::from_landing(idx, landing, plan))
        .collect()
}

pub mod text {
    use super::*;

    /// One output line: `IATA city country lat lon HH:MM:SS`.
    ///
    /// A `+Nd` suffix marks passing times on a later date than the departure.
    pub fn format_line(landing: &PlannedLanding, departure: NaiveDateTime) -> String {
        let mut line = format!(
            "{} {}",
            landing.airport,
            landing.passing.at.format(TIME_FORMAT)
        );
        let days = landing.passing.day_offset(departure);
        if days > 0 {
            line.push_str(&format!(" +{days}d"));
        }
        line
    }

    pub fn write_plan(writer: &mut dyn Write, plan: &FlightPlan) -> io::Result<()> {
        let departure = plan.parameters.departure();
        for landing in &plan.landings {
            writeln!(writer, "{}", format_line(landing, departure))?;
        }
        Ok(())
    }
}

pub mod csv {
    use super::*;

    /// Write the plan as CSV with a header row.
    pub fn write_plan(writer: &mut dyn Write, plan: &FlightPlan) -> ::csv::Result<()> {
        let mut wtr = ::csv::Writer::from_writer(writer);
        for record in records(plan) {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Read rows previously written by [`write_plan`].
    pub fn read_records(path: &Path) -> ::csv::Result<Vec<Record>> {
        let mut rdr = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)?;
        rdr.deserialize().collect()
    }
}

pub mod json {
    use super::*;
    use serde_json::to_writer_pretty;

    #[derive(Serialize)]
    struct PlanDocument<'a> {
        start: &'a str,
        destination: &'a str,
        algorithm: &'a str,
        route_km: f64,
        glide_range_km: f64,
        cruise_speed_km_h: f64,
        departure: String,
        step_km: f64,
        candidates: usize,
        landings: Vec<Record>,
    }

    /// Write the plan and its route metadata as pretty-printed JSON.
    pub fn write_plan(writer: &mut dyn Write, plan: &FlightPlan) -> serde_json::Result<()> {
        let document = PlanDocument {
            start: &plan.route.start().ident,
            destination: &plan.route.destination().ident,
            algorithm: plan.algorithm.label(),
            route_km: plan.route.length_km(),
            glide_range_km: plan.parameters.glide_range_km(),
            cruise_speed_km_h: plan.parameters.cruise_speed_km_h(),
            departure: plan.parameters.departure().format(TIMESTAMP_FORMAT).to_string(),
            step_km: plan.step_km,
            candidates: plan.candidates,
            landings: records(plan),
        };
        to_writer_pretty(writer, &document)
    }
}
