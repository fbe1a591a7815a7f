//! Thai Wind and Seismic Zone Tables
//!
//! Province-name lookups for the Thai code variants: TIS 1311-50 wind zones
//! with their basic wind speeds, and DPT 1301/1302-61 seismic zones with
//! mapped spectral accelerations. Keys are free-text province names, matched
//! case-insensitively after trimming.
//!
//! Unknown provinces fall back to a documented conservative default zone.
//! The fallback is never silent: the lookup result carries a `used_default`
//! flag that calculators must surface as a warning in their results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wind zone record (TIS 1311-50)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindZone {
    /// Zone identifier (e.g. "Zone 2")
    pub zone: String,

    /// Basic wind speed as published, in m/s
    pub basic_wind_speed_ms: f64,
}

/// Seismic zone record (DPT 1301/1302-61)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicZone {
    /// Zone identifier (e.g. "High", "Bangkok Basin")
    pub zone: String,

    /// Mapped short-period spectral acceleration Ss (g)
    pub ss_g: f64,

    /// Mapped 1-second spectral acceleration S1 (g)
    pub s1_g: f64,
}

/// Result of a zone lookup: the record plus whether the documented
/// default was substituted for an unknown key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneLookup<T> {
    /// The matched (or default) zone record
    pub record: T,

    /// True when the key had no table entry and the default zone was used
    pub used_default: bool,
}

/// Default wind zone substituted for unknown provinces: inland Zone 1.
pub fn default_wind_zone() -> WindZone {
    WindZone {
        zone: "Zone 1".to_string(),
        basic_wind_speed_ms: 25.0,
    }
}

/// Default seismic zone substituted for unknown provinces: the low-hazard
/// zone covering most of central and southern Thailand.
pub fn default_seismic_zone() -> SeismicZone {
    SeismicZone {
        zone: "Low".to_string(),
        ss_g: 0.15,
        s1_g: 0.05,
    }
}

/// Normalize a province key for table lookup.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

fn wind(map: &mut BTreeMap<String, WindZone>, province: &str, zone: &str, speed_ms: f64) {
    map.insert(
        normalize_key(province),
        WindZone {
            zone: zone.to_string(),
            basic_wind_speed_ms: speed_ms,
        },
    );
}

/// Build the built-in province wind zone table.
///
/// Zone speeds: Zone 1 = 25 m/s (inland), Zone 2 = 27 m/s (north/northeast),
/// Zone 3 = 29 m/s (eastern seaboard and upper gulf coast),
/// Zone 4 = 31 m/s (southern peninsula, typhoon-exposed).
pub fn builtin_wind_zones() -> BTreeMap<String, WindZone> {
    let mut m = BTreeMap::new();

    // Zone 1 - central plains
    wind(&mut m, "Bangkok", "Zone 1", 25.0);
    wind(&mut m, "Nonthaburi", "Zone 1", 25.0);
    wind(&mut m, "Pathum Thani", "Zone 1", 25.0);
    wind(&mut m, "Samut Prakan", "Zone 1", 25.0);
    wind(&mut m, "Ayutthaya", "Zone 1", 25.0);
    wind(&mut m, "Nakhon Pathom", "Zone 1", 25.0);

    // Zone 2 - north and northeast
    wind(&mut m, "Chiang Mai", "Zone 2", 27.0);
    wind(&mut m, "Chiang Rai", "Zone 2", 27.0);
    wind(&mut m, "Khon Kaen", "Zone 2", 27.0);
    wind(&mut m, "Udon Thani", "Zone 2", 27.0);
    wind(&mut m, "Nakhon Ratchasima", "Zone 2", 27.0);
    wind(&mut m, "Ubon Ratchathani", "Zone 2", 27.0);

    // Zone 3 - eastern seaboard, upper gulf
    wind(&mut m, "Chonburi", "Zone 3", 29.0);
    wind(&mut m, "Rayong", "Zone 3", 29.0);
    wind(&mut m, "Chanthaburi", "Zone 3", 29.0);
    wind(&mut m, "Prachuap Khiri Khan", "Zone 3", 29.0);

    // Zone 4 - southern peninsula
    wind(&mut m, "Phuket", "Zone 4", 31.0);
    wind(&mut m, "Songkhla", "Zone 4", 31.0);
    wind(&mut m, "Surat Thani", "Zone 4", 31.0);
    wind(&mut m, "Nakhon Si Thammarat", "Zone 4", 31.0);
    wind(&mut m, "Narathiwat", "Zone 4", 31.0);

    m
}

fn seismic(
    map: &mut BTreeMap<String, SeismicZone>,
    province: &str,
    zone: &str,
    ss: f64,
    s1: f64,
) {
    map.insert(
        normalize_key(province),
        SeismicZone {
            zone: zone.to_string(),
            ss_g: ss,
            s1_g: s1,
        },
    );
}

/// Build the built-in province seismic zone table.
///
/// The western/northern provinces along the active fault systems carry the
/// high-hazard values; Bangkok gets its own basin amplification zone.
pub fn builtin_seismic_zones() -> BTreeMap<String, SeismicZone> {
    let mut m = BTreeMap::new();

    // High hazard - northern and western fault zones
    seismic(&mut m, "Chiang Mai", "High", 0.75, 0.25);
    seismic(&mut m, "Chiang Rai", "High", 0.75, 0.25);
    seismic(&mut m, "Mae Hong Son", "High", 0.75, 0.25);
    seismic(&mut m, "Tak", "High", 0.70, 0.22);
    seismic(&mut m, "Kanchanaburi", "Moderate", 0.45, 0.15);
    seismic(&mut m, "Lampang", "Moderate", 0.45, 0.15);
    seismic(&mut m, "Nan", "Moderate", 0.45, 0.15);

    // Bangkok basin - long-period soft soil amplification
    seismic(&mut m, "Bangkok", "Bangkok Basin", 0.35, 0.12);
    seismic(&mut m, "Nonthaburi", "Bangkok Basin", 0.35, 0.12);
    seismic(&mut m, "Samut Prakan", "Bangkok Basin", 0.35, 0.12);

    // Low hazard - everywhere else with entries
    seismic(&mut m, "Khon Kaen", "Low", 0.15, 0.05);
    seismic(&mut m, "Chonburi", "Low", 0.15, 0.05);
    seismic(&mut m, "Phuket", "Low", 0.20, 0.07);
    seismic(&mut m, "Songkhla", "Low", 0.15, 0.05);

    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_normalization() {
        assert_eq!(normalize_key("  Chiang Mai "), "chiang mai");
    }

    #[test]
    fn test_wind_table_lookup() {
        let table = builtin_wind_zones();
        let phuket = table.get(&normalize_key("Phuket")).unwrap();
        assert_eq!(phuket.zone, "Zone 4");
        assert_eq!(phuket.basic_wind_speed_ms, 31.0);
    }

    #[test]
    fn test_wind_speeds_positive_and_bounded() {
        for (province, zone) in builtin_wind_zones() {
            assert!(
                zone.basic_wind_speed_ms >= 20.0 && zone.basic_wind_speed_ms <= 40.0,
                "{province}: implausible basic wind speed"
            );
        }
    }

    #[test]
    fn test_seismic_table_lookup() {
        let table = builtin_seismic_zones();
        let cm = table.get(&normalize_key("chiang mai")).unwrap();
        assert_eq!(cm.zone, "High");
        assert!(cm.ss_g > cm.s1_g);
    }

    #[test]
    fn test_seismic_accelerations_nonnegative() {
        for (province, zone) in builtin_seismic_zones() {
            assert!(zone.ss_g >= 0.0, "{province}");
            assert!(zone.s1_g >= 0.0, "{province}");
        }
    }

    #[test]
    fn test_default_zones_documented() {
        assert_eq!(default_wind_zone().zone, "Zone 1");
        assert_eq!(default_seismic_zone().zone, "Low");
    }
}
