//! Lookup tables shared by the risk models.
mod threshold;

pub use threshold::*;
