//! Flight planning orchestrator: filter, select, then time each landing.

use glide_core::{Airport, Catalog};
use tracing::{debug, info};

use crate::coverage::coverage_filter;
use crate::flight::{FlightParameters, ParameterError, Route, ensure_step};
use crate::passing::{PassingTime, TimeOverflow, passing_time};
use crate::selection::{Algorithm, SelectionError};

/// Top-level planning error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    #[error("invalid flight parameter: {0}")]
    Parameter(#[from] ParameterError),
    #[error("landing selection failed: {0}")]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    TimeOverflow(#[from] TimeOverflow),
}

impl PlanError {
    /// True when the plan failed because glide coverage could not be kept.
    pub fn is_range_exceeded(&self) -> bool {
        matches!(
            self,
            Self::Selection(SelectionError::RangeExceeded { .. })
        )
    }
}

/// Inputs for one end-to-end plan.
#[derive(Debug, Clone)]
pub struct FlightConfig {
    pub start: Airport,
    pub destination: Airport,
    pub parameters: FlightParameters,
    pub algorithm: Algorithm,
    /// Sampling step override; defaults to the algorithm's nominal step.
    pub step_km: Option<f64>,
}

/// One entry of the landing sequence with its passing time.
#[derive(Debug, Clone)]
pub struct PlannedLanding {
    pub airport: Airport,
    pub passing: PassingTime,
}

/// Result of a successful planning run.
#[derive(Debug, Clone)]
pub struct FlightPlan {
    pub route: Route,
    pub parameters: FlightParameters,
    pub algorithm: Algorithm,
    pub step_km: f64,
    /// Airports left after the coverage filter.
    pub candidates: usize,
    pub landings: Vec<PlannedLanding>,
}

impl FlightPlan {
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.landings.iter().map(|landing| &landing.airport)
    }
}

/// Run the coverage filter, the chosen selector, and the passing-time
/// calculator for one flight.
///
/// `catalog` is only borrowed; selectors that consume airports work on their
/// own copies, so the same catalog can back any number of calls.
pub fn plan_flight(config: &FlightConfig, catalog: &Catalog) -> Result<FlightPlan, PlanError> {
    let step_km = ensure_step(
        config
            .step_km
            .unwrap_or_else(|| config.algorithm.default_step_km()),
    )?;
    let range_km = config.parameters.glide_range_km();
    let route = Route::new(config.start.clone(), config.destination.clone());

    let closest = coverage_filter(catalog, &route, range_km);
    debug!(
        catalog = catalog.len(),
        candidates = closest.len(),
        route_km = route.length_km(),
        "coverage filter applied"
    );

    let sequence = config
        .algorithm
        .select(&route, &closest, range_km, step_km)?;
    info!(
        algorithm = %config.algorithm,
        landings = sequence.len(),
        "landing sequence selected"
    );

    let landings = sequence
        .into_iter()
        .map(|airport| {
            let passing = passing_time(&route, &airport, &config.parameters)?;
            debug!(
                airport = %airport.ident,
                along_route_km = passing.along_route_km,
                "passing time computed"
            );
            Ok::<_, TimeOverflow>(PlannedLanding { airport, passing })
        })
        .collect::<Result<Vec<_>, TimeOverflow>>()?;

    Ok(FlightPlan {
        route,
        parameters: config.parameters,
        algorithm: config.algorithm,
        step_km,
        candidates: closest.len(),
        landings,
    })
}
