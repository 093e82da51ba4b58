//! Output rendering (Markdown fragments, document template)

pub mod coverage;
pub mod errors;
pub mod formatter;
pub mod run_report;
pub mod template;
pub mod thresholds;

pub use coverage::CoverageDetail;
pub use formatter::{MarkdownFormatter, SectionFormatter};
pub use template::{insert_args, Template, DEFAULT_TEMPLATE};
