//! Filter criteria
//!
//! The full set of predicates a filter submission can carry. A cone
//! search only exists when a positive radius and a center are both
//! supplied; a zero radius does not become an always-false (or
//! always-true) positional predicate, it is simply absent.

use serde::{Deserialize, Serialize};

use crate::catalogue::SourceClass;

/// Positional cone-search parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeSearch {
    /// Center right ascension, degrees
    pub ra_deg: f64,
    /// Center declination, degrees
    pub dec_deg: f64,
    /// Search radius, arcminutes
    pub radius_arcmin: f64,
}

impl ConeSearch {
    /// Builds a cone search, or `None` when the radius is not positive.
    pub fn new(ra_deg: f64, dec_deg: f64, radius_arcmin: f64) -> Option<Self> {
        (radius_arcmin > 0.0).then_some(Self {
            ra_deg,
            dec_deg,
            radius_arcmin,
        })
    }
}

/// Conjunction of filter predicates applied on submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Keep sources with `cmp1` strictly above this threshold.
    ///
    /// The UI offers [0.5, 1.0] but the engine accepts any value in [0, 1].
    pub probability_threshold: f64,
    /// Keep sources whose primary class is in this set.
    ///
    /// An empty set matches nothing; it is not a no-op.
    pub allowed_classes: Vec<SourceClass>,
    /// When set, keep only sources with a contribution row
    pub require_explanation: bool,
    /// Optional positional predicate
    pub cone: Option<ConeSearch>,
}

impl FilterCriteria {
    /// Criteria with a threshold, all classes allowed, no other predicates
    pub fn new(probability_threshold: f64) -> Self {
        Self {
            probability_threshold,
            allowed_classes: SourceClass::ALL.to_vec(),
            require_explanation: false,
            cone: None,
        }
    }

    /// Restricts the allowed class set
    pub fn with_classes(mut self, classes: Vec<SourceClass>) -> Self {
        self.allowed_classes = classes;
        self
    }

    /// Requires explanation availability
    pub fn with_explanation_required(mut self) -> Self {
        self.require_explanation = true;
        self
    }

    /// Adds a cone-search predicate (ignored when `cone` is `None`)
    pub fn with_cone(mut self, cone: Option<ConeSearch>) -> Self {
        self.cone = cone;
        self
    }
}
