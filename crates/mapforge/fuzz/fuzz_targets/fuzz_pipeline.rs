//! Fuzz target for CSV loading and layer building.
//!
//! Arbitrary bytes go through the parser and, when they parse, through both
//! builders. Nothing may panic; errors and skipped rows are fine.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mapforge::input::Parser;
use mapforge::{FeatureBuilder, PointOptions};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(dataset) = Parser::new().parse_slice(data) else {
        return;
    };

    let builder = FeatureBuilder::new();
    let _ = builder.build_points(&dataset, &PointOptions::new());

    if let Ok(roles) = builder
        .inference()
        .infer(&dataset.headers, &dataset.sample_row(), None)
    {
        if let Ok(layer) = builder.build_choropleth(&dataset, &roles) {
            assert!(layer.dataset.min_value <= layer.dataset.max_value);
        }
    }
});
