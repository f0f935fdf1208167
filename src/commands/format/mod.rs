//! Shared output formatting helpers for commands
//!
//! Provides common patterns for JSON output, Records headers and
//! candidate rendering across command modules.

pub mod dispatch;
pub mod status;

pub use dispatch::output_by_format;
pub use status::{
    describe_candidate, print_json, print_not_found, print_records_header, print_records_match,
};
