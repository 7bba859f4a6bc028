//! Render adapters
//!
//! Pure data-to-plot transforms: sky-map points, explanation bar charts,
//! and the feature/contribution scatter. No chart drawing happens here;
//! these are the numeric payloads the dashboard frontend plots.

mod bars;
mod scatter;
mod skymap;

pub use bars::{global_bar_chart, local_bar_chart, Bar, GlobalBarChart, LocalBarChart};
pub use scatter::{feature_scatter, ScatterPoint};
pub use skymap::{equatorial_to_galactic, sky_map_data, SkyMapData, SkyPoint};
