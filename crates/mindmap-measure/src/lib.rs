//! Text measurement for mind-map layout.
//!
//! Node sizes depend on how the host renders text. The host exposes two
//! asynchronous services, width measurement and line splitting, through the
//! [`TextMeasurer`] trait. The orchestrator fans one request out per node
//! and field, waits for all of them, and only then hands back results that
//! can be written onto the tree.
//!
//! # Example
//!
//! ```ignore
//! use mindmap_measure::{measure_all, EstimatingMeasurer, MeasureSettings};
//!
//! let measured = measure_all(&mut tree, &EstimatingMeasurer::new(), &settings, &shared).await?;
//! measured.apply(&mut tree, &shared);
//! ```

mod collaborator;
mod estimate;
mod normalize;
mod orchestrator;

pub use collaborator::{LineReply, MeasureRequest, TextMeasurer};
pub use estimate::{EstimatingMeasurer, GlyphMetrics};
pub use normalize::{clear_control_chars, non_empty_lines};
pub use orchestrator::{
    measure_all, plan_requests, run_requests, MeasureSettings, MeasuredText, Measurement,
    PlannedRequest, Reply,
};
