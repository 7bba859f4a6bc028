//! Bar-chart adapters
//!
//! Plot-ready bar lists for the local and global explanation charts.
//! Purely a shape transform over a [`Ranking`]; unavailable rankings map
//! to `None` so handlers can emit the informational empty state.

use serde::Serialize;

use crate::catalogue::SourceClass;
use crate::explain::Ranking;

/// One horizontal bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub feature: String,
    pub value: f64,
    /// Sign of the contribution, used for bar colouring
    pub positive: bool,
}

/// Local explanation chart: one source, its class, its ranked bars
#[derive(Debug, Clone, Serialize)]
pub struct LocalBarChart {
    pub source: String,
    pub class1: SourceClass,
    pub bars: Vec<Bar>,
}

/// Global explanation chart over the current selection
#[derive(Debug, Clone, Serialize)]
pub struct GlobalBarChart {
    pub source_count: usize,
    pub bars: Vec<Bar>,
}

/// Builds the local chart, or `None` when the ranking is unavailable.
pub fn local_bar_chart(source: &str, class1: SourceClass, ranking: &Ranking) -> Option<LocalBarChart> {
    ranking.features().map(|features| LocalBarChart {
        source: source.to_string(),
        class1,
        bars: bars_from(features.iter().map(|f| (f.name.clone(), f.value))),
    })
}

/// Builds the global chart, or `None` when the ranking is unavailable.
pub fn global_bar_chart(source_count: usize, ranking: &Ranking) -> Option<GlobalBarChart> {
    ranking.features().map(|features| GlobalBarChart {
        source_count,
        bars: bars_from(features.iter().map(|f| (f.name.clone(), f.value))),
    })
}

fn bars_from(features: impl Iterator<Item = (String, f64)>) -> Vec<Bar> {
    features
        .map(|(feature, value)| Bar {
            feature,
            value,
            positive: value > 0.0,
        })
        .collect()
}
