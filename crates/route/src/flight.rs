//! Route geometry and validated flight parameters.

use chrono::NaiveDateTime;
use glide_core::{Airport, Segment};

/// Parameter validation failures surfaced before any planning starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("glide range must be a positive number of kilometres (got {0})")]
    NonPositiveRange(f64),
    #[error("cruising speed must be a positive number of km/h (got {0})")]
    NonPositiveSpeed(f64),
    #[error("sampling step must be a positive number of kilometres (got {0})")]
    NonPositiveStep(f64),
}

pub(crate) fn ensure_range(range_km: f64) -> Result<f64, ParameterError> {
    if range_km.is_finite() && range_km > 0.0 {
        Ok(range_km)
    } else {
        Err(ParameterError::NonPositiveRange(range_km))
    }
}

pub(crate) fn ensure_step(step_km: f64) -> Result<f64, ParameterError> {
    if step_km.is_finite() && step_km > 0.0 {
        Ok(step_km)
    } else {
        Err(ParameterError::NonPositiveStep(step_km))
    }
}

/// Direct route between two airports. The length is computed once.
#[derive(Debug, Clone)]
pub struct Route {
    start: Airport,
    destination: Airport,
    length_km: f64,
}

impl Route {
    pub fn new(start: Airport, destination: Airport) -> Self {
        let length_km = start.distance_to(destination.location);
        Self {
            start,
            destination,
            length_km,
        }
    }

    pub fn start(&self) -> &Airport {
        &self.start
    }

    pub fn destination(&self) -> &Airport {
        &self.destination
    }

    /// Scaled straight-line length in kilometres.
    pub fn length_km(&self) -> f64 {
        self.length_km
    }

    pub fn segment(&self) -> Segment {
        Segment::new(self.start.location, self.destination.location)
    }
}

/// Scalars shared by every selection algorithm and the passing-time calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightParameters {
    glide_range_km: f64,
    cruise_speed_km_h: f64,
    departure: NaiveDateTime,
}

impl FlightParameters {
    pub fn new(
        glide_range_km: f64,
        cruise_speed_km_h: f64,
        departure: NaiveDateTime,
    ) -> Result<Self, ParameterError> {
        ensure_range(glide_range_km)?;
        if !(cruise_speed_km_h.is_finite() && cruise_speed_km_h > 0.0) {
            return Err(ParameterError::NonPositiveSpeed(cruise_speed_km_h));
        }
        Ok(Self {
            glide_range_km,
            cruise_speed_km_h,
            departure,
        })
    }

    pub fn glide_range_km(&self) -> f64 {
        self.glide_range_km
    }

    pub fn cruise_speed_km_h(&self) -> f64 {
        self.cruise_speed_km_h
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }
}
