// Core algorithm exports
pub mod areas;
pub mod matcher;
pub mod tags;

pub use areas::{any_area_matches, area_matches, normalize_area, ADMINISTRATIVE_UNITS};
pub use matcher::{Matcher, DEFAULT_MAX_RESULTS};
pub use tags::{any_tag_matches, normalize_tag, tag_matches};
