//! Traits for the capabilities the facade consumes but does not own.
//!
//! Every fallible method returns [`casement_common::Result`] so failures reach
//! the original caller unchanged.

mod services;
mod window;

pub use services::*;
pub use window::*;
