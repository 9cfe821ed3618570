//! Feat domain module.
//!
//! Feats are the monthly timed challenges a user can attempt. This crate
//! only reads them; their lifecycle belongs to the remote feats service.

mod descriptor;

pub use descriptor::{Feat, DEFAULT_DURATION_MINUTES};
