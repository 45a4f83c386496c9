//! Literature-derived risk models.
//!
//! Every query is a pure function of its arguments over the constant tables
//! in [`crate::params`], so models can be evaluated concurrently without any
//! synchronization.
pub mod hospitalization;
pub mod infectiousness;
pub mod mixture;
pub mod mortality;
pub mod registry;
pub use hospitalization::*;
pub use infectiousness::*;
pub use mixture::*;
pub use mortality::*;
pub use registry::*;
