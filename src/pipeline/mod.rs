//! Pure result-processing stages.
//!
//! - `ProfileFilter`: keep hits matching the profile URL pattern
//! - `Normalizer`: derive display-ready `ProfileRecord`s
//! - `Exporter`: serialize records into a downloadable JSON artifact
//! - `ResultsView`: combine the above for a session snapshot

pub mod export;
pub mod filter;
pub mod normalize;
pub mod view;

pub use export::{ExportArtifact, Exporter};
pub use filter::ProfileFilter;
pub use normalize::Normalizer;
pub use view::ResultsView;
