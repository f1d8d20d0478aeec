//! Application layer managing state and user workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing application state, input modes, and event dispatch.

pub mod state;

pub use state::*;
