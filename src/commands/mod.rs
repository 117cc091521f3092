//! Command implementations for the pourplan CLI
//!
//! One module per subcommand:
//!
//! - **check**: run the formula's post-install smoke test
//! - **completions**: generate shell completions for this tool
//! - **info**: formula metadata and the effect of the selected options
//! - **options**: list the declared build options
//! - **plan**: show or export the install plan
//! - **source**: show which upstream source would be fetched

pub mod check;
pub mod completions;
pub mod info;
pub mod options;
pub mod plan;
pub mod source;

pub use check::check;
pub use completions::completions;
pub use info::info;
pub use options::options;
pub use plan::plan;
pub use source::source;
