mod context;
mod matcher;

pub use context::{ScanContext, Step};
pub use matcher::scan_lines;
