//! Sky-map adapter
//!
//! Turns the selected rows into plot-ready points for the whole-sky
//! (Aitoff-projected) map: each source's equatorial position, its
//! galactic coordinates with longitude wrapped to [-180°, 180°), and its
//! primary class for colour/marker grouping. Drawing itself happens
//! client-side.

use serde::Serialize;

use crate::catalogue::{SourceClass, SourceRecord};

// J2000 orientation of the galactic frame
const NGP_RA_DEG: f64 = 192.85948;
const NGP_DEC_DEG: f64 = 27.12825;
const NCP_GAL_LON_DEG: f64 = 122.93192;

/// One plottable source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyPoint {
    pub name: String,
    pub ra: f64,
    pub dec: f64,
    /// Galactic longitude, degrees, wrapped to [-180, 180)
    pub gal_l: f64,
    /// Galactic latitude, degrees
    pub gal_b: f64,
    pub class1: SourceClass,
}

/// Full sky-map payload
#[derive(Debug, Clone, Serialize)]
pub struct SkyMapData {
    pub points: Vec<SkyPoint>,
    /// Integer marker-size scale chosen by the user
    pub point_scale: u32,
}

/// Builds sky-map data for the given rows.
pub fn sky_map_data(rows: &[SourceRecord], point_scale: u32) -> SkyMapData {
    let points = rows
        .iter()
        .map(|record| {
            let (gal_l, gal_b) = equatorial_to_galactic(record.ra, record.dec);
            SkyPoint {
                name: record.name.clone(),
                ra: record.ra,
                dec: record.dec,
                gal_l,
                gal_b,
                class1: record.class1,
            }
        })
        .collect();
    SkyMapData {
        points,
        point_scale,
    }
}

/// Converts J2000 equatorial coordinates (degrees) to galactic (l, b)
/// with l wrapped to [-180, 180) for the Aitoff projection.
pub fn equatorial_to_galactic(ra_deg: f64, dec_deg: f64) -> (f64, f64) {
    let ra = ra_deg.to_radians();
    let dec = dec_deg.to_radians();
    let ngp_ra = NGP_RA_DEG.to_radians();
    let ngp_dec = NGP_DEC_DEG.to_radians();

    let (sin_dec, cos_dec) = dec.sin_cos();
    let (sin_ngp, cos_ngp) = ngp_dec.sin_cos();
    let dra = ra - ngp_ra;

    let sin_b = sin_ngp * sin_dec + cos_ngp * cos_dec * dra.cos();
    let b = sin_b.clamp(-1.0, 1.0).asin();

    let y = cos_dec * dra.sin();
    let x = cos_ngp * sin_dec - sin_ngp * cos_dec * dra.cos();
    let l = NCP_GAL_LON_DEG - y.atan2(x).to_degrees();

    (wrap_longitude(l), b.to_degrees())
}

/// Wraps a longitude in degrees to [-180, 180).
fn wrap_longitude(l_deg: f64) -> f64 {
    let mut l = l_deg.rem_euclid(360.0);
    if l >= 180.0 {
        l -= 360.0;
    }
    l
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_galactic_center() {
        // Sgr A* sits at the galactic origin
        let (l, b) = equatorial_to_galactic(266.40499, -28.93617);
        assert!(l.abs() < 0.01, "l = {l}");
        assert!(b.abs() < 0.01, "b = {b}");
    }

    #[test]
    fn test_north_galactic_pole() {
        let (_, b) = equatorial_to_galactic(NGP_RA_DEG, NGP_DEC_DEG);
        assert!((b - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_longitude_wrapped() {
        for ra in [0.0, 90.0, 180.0, 270.0, 359.9] {
            let (l, _) = equatorial_to_galactic(ra, 10.0);
            assert!((-180.0..180.0).contains(&l), "l = {l} for ra = {ra}");
        }
    }

    #[test]
    fn test_sky_map_carries_class_and_scale() {
        let rows = vec![SourceRecord {
            name: "src".to_string(),
            ra: 83.633,
            dec: 22.0145,
            class1: SourceClass::Pulsar,
            cmp1: 0.99,
            class2: SourceClass::Lmxb,
            cmp2: 0.005,
            has_explanation: true,
        }];
        let data = sky_map_data(&rows, 4);
        assert_eq!(data.point_scale, 4);
        assert_eq!(data.points.len(), 1);
        assert_eq!(data.points[0].class1, SourceClass::Pulsar);
    }
}
