//! Airport records and the identifier-keyed catalog.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::geometry::{self, Point};

/// Candidate landing site. Identity is the identifier alone.
#[derive(Debug, Clone)]
pub struct Airport {
    pub ident: String,
    pub city: String,
    pub country: String,
    pub location: Point,
}

impl Airport {
    pub fn new(
        ident: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        location: Point,
    ) -> Self {
        Self {
            ident: ident.into(),
            city: city.into(),
            country: country.into(),
            location,
        }
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Scaled distance from this airport to `point` in kilometres.
    pub fn distance_to(&self, point: Point) -> f64 {
        geometry::distance(self.location, point)
    }

    /// Whether `point` is within `range_km` of this airport.
    pub fn covers(&self, point: Point, range_km: f64) -> bool {
        geometry::in_range(point, self.location, range_km)
    }
}

impl PartialEq for Airport {
    fn eq(&self, other: &Self) -> bool {
        self.ident == other.ident
    }
}

impl Eq for Airport {}

impl Hash for Airport {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ident.hash(state);
    }
}

impl PartialOrd for Airport {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Airport {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ident.cmp(&other.ident)
    }
}

impl Borrow<str> for Airport {
    fn borrow(&self) -> &str {
        &self.ident
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:.4} {:.4}",
            self.ident,
            self.city,
            self.country,
            self.latitude(),
            self.longitude()
        )
    }
}

/// Set of airports keyed by identifier, iterated in identifier order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    airports: BTreeSet<Airport>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an airport; returns `false` when the identifier is already present.
    pub fn insert(&mut self, airport: Airport) -> bool {
        self.airports.insert(airport)
    }

    /// Remove an airport by identifier.
    pub fn remove(&mut self, ident: &str) -> Option<Airport> {
        self.airports.take(ident)
    }

    pub fn get(&self, ident: &str) -> Option<&Airport> {
        self.airports.get(ident)
    }

    pub fn contains(&self, ident: &str) -> bool {
        self.airports.contains(ident)
    }

    /// Case-insensitive identifier lookup.
    pub fn find_ignore_case(&self, ident: &str) -> Option<&Airport> {
        self.get(ident).or_else(|| {
            self.airports
                .iter()
                .find(|airport| airport.ident.eq_ignore_ascii_case(ident))
        })
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Airport> {
        self.airports.iter()
    }
}

impl FromIterator<Airport> for Catalog {
    fn from_iter<I: IntoIterator<Item = Airport>>(iter: I) -> Self {
        Self {
            airports: iter.into_iter().collect(),
        }
    }
}

impl Extend<Airport> for Catalog {
    fn extend<I: IntoIterator<Item = Airport>>(&mut self, iter: I) {
        self.airports.extend(iter);
    }
}

impl IntoIterator for Catalog {
    type Item = Airport;
    type IntoIter = btree_set::IntoIter<Airport>;

    fn into_iter(self) -> Self::IntoIter {
        self.airports.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Airport;
    type IntoIter = btree_set::Iter<'a, Airport>;

    fn into_iter(self) -> Self::IntoIter {
        self.airports.iter()
    }
}
