//! Screen regions recorded during render, used for mouse hit testing

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
