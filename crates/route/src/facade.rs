//! Re-exported APIs for consumers of the route crate.

pub use crate::coverage::coverage_filter;
pub use crate::flight::{FlightParameters, ParameterError, Route};
pub use crate::passing::{PassingTime, TimeOverflow, passing_time};
pub use crate::plan::{FlightConfig, FlightPlan, PlanError, PlannedLanding, plan_flight};
pub use crate::selection::{
    Algorithm, SelectionError, fixed_interval, greedy_nearest, midpoint_lookahead,
};
pub use glide_core::{Airport, Catalog, Point};
