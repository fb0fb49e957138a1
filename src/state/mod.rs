//! State Management
//!
//! Global application state and point-of-sale cart logic.

pub mod cart;
pub mod global;

pub use global::{provide_global_state, GlobalState};
