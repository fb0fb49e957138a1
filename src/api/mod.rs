//! Backend Interface
//!
//! REST client plus serde mirrors of the documents it exchanges.

pub mod client;
pub mod models;
