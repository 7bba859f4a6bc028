//! Core catalogue record types
//!
//! One row per classified point source. Classes come from a fixed
//! 8-symbol enumeration; membership probabilities are model confidences
//! in [0, 1]. Records are immutable once loaded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::CatalogueError;

/// The fixed source-class enumeration used by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceClass {
    #[serde(rename = "AGN")]
    Agn,
    #[serde(rename = "STAR")]
    Star,
    #[serde(rename = "YSO")]
    Yso,
    #[serde(rename = "HMXB")]
    Hmxb,
    #[serde(rename = "LMXB")]
    Lmxb,
    #[serde(rename = "ULX")]
    Ulx,
    #[serde(rename = "PULSAR")]
    Pulsar,
    #[serde(rename = "CV")]
    Cv,
}

impl SourceClass {
    /// All classes, in the display order used by the dashboard
    pub const ALL: [SourceClass; 8] = [
        SourceClass::Agn,
        SourceClass::Star,
        SourceClass::Yso,
        SourceClass::Hmxb,
        SourceClass::Lmxb,
        SourceClass::Ulx,
        SourceClass::Pulsar,
        SourceClass::Cv,
    ];

    /// Returns the class symbol as stored in the catalogue
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceClass::Agn => "AGN",
            SourceClass::Star => "STAR",
            SourceClass::Yso => "YSO",
            SourceClass::Hmxb => "HMXB",
            SourceClass::Lmxb => "LMXB",
            SourceClass::Ulx => "ULX",
            SourceClass::Pulsar => "PULSAR",
            SourceClass::Cv => "CV",
        }
    }
}

impl fmt::Display for SourceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SourceClass {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AGN" => Ok(SourceClass::Agn),
            "STAR" => Ok(SourceClass::Star),
            "YSO" => Ok(SourceClass::Yso),
            "HMXB" => Ok(SourceClass::Hmxb),
            "LMXB" => Ok(SourceClass::Lmxb),
            "ULX" => Ok(SourceClass::Ulx),
            "PULSAR" => Ok(SourceClass::Pulsar),
            "CV" => Ok(SourceClass::Cv),
            other => Err(CatalogueError::UnknownClass(other.to_string())),
        }
    }
}

/// One classified source in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Unique source identifier
    pub name: String,
    /// Right ascension in degrees, [0, 360)
    pub ra: f64,
    /// Declination in degrees, [-90, 90]
    pub dec: f64,
    /// Most probable class
    pub class1: SourceClass,
    /// Class-membership probability for `class1`
    pub cmp1: f64,
    /// Second most probable class
    pub class2: SourceClass,
    /// Class-membership probability for `class2`
    pub cmp2: f64,
    /// Whether a per-source contribution vector exists
    pub has_explanation: bool,
}

impl SourceRecord {
    /// Validates coordinate and probability ranges.
    ///
    /// `cmp1 >= cmp2` is expected from the upstream classifier but not
    /// enforced here.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("empty source identifier".to_string());
        }
        if !(0.0..360.0).contains(&self.ra) {
            return Err(format!("ra {} outside [0, 360)", self.ra));
        }
        if !(-90.0..=90.0).contains(&self.dec) {
            return Err(format!("dec {} outside [-90, 90]", self.dec));
        }
        if !(0.0..=1.0).contains(&self.cmp1) {
            return Err(format!("CMP1 {} outside [0, 1]", self.cmp1));
        }
        if !(0.0..=1.0).contains(&self.cmp2) {
            return Err(format!("CMP2 {} outside [0, 1]", self.cmp2));
        }
        Ok(())
    }
}
