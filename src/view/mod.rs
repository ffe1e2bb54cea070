mod histogram;
mod report;

pub use histogram::{RenderOptions, render_svg, save_histogram_json, save_svg};
pub use report::write_listing;
