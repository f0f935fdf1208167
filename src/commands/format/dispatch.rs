//! Format dispatch macros for command output
//!
//! The macros are defined in `crate::cli::format` and re-exported here for
//! convenient access from command modules.
//!
/// ```rust,ignore
/// use crate::commands::format::output_by_format;
///
/// output_by_format!(cli.format,
///     json => { print_json(&outcome)?; },
///     human => { println!("Done"); },
///     records => { println!("H mode=done"); }
/// );
/// ```
pub use crate::output_by_format;
