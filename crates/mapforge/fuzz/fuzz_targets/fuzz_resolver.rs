//! Fuzz target for region token resolution.
//!
//! Checks that resolution never panics and that any resolved anchor has a
//! centroid within valid latitude/longitude bounds.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mapforge::{RegionMode, RegionResolver};

fuzz_target!(|data: &[u8]| {
    let token = String::from_utf8_lossy(data);
    let resolver = RegionResolver::new();

    for mode in [RegionMode::Country, RegionMode::IndonesiaProvince] {
        let _ = resolver.normalize(&token, mode);
        if let Some(anchor) = resolver.resolve(&token, mode) {
            assert!((-90.0..=90.0).contains(&anchor.centroid.lat));
            assert!((-180.0..=180.0).contains(&anchor.centroid.lon));
        }
    }
});
