//! Map-layer builders.
//!
//! [`FeatureBuilder`] turns a parsed table into either a point
//! [`PointFeatureCollection`] or a region x period [`ChoroplethDataset`].
//! Both builders skip rows they cannot place and account for them in a
//! [`SkipReport`].

mod builder;
mod choropleth;
mod geojson;
mod points;
mod report;

pub use builder::FeatureBuilder;
pub use choropleth::{
    ChoroplethDataset, ChoroplethLayer, IMPLICIT_PERIOD, period_label, sort_periods,
};
pub use geojson::{POPUP_PROPERTY, PointFeature, PointFeatureCollection, PointGeometry};
pub use points::{GeometrySource, PointLayer, PointOptions};
pub use report::SkipReport;
