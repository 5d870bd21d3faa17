//! Mergington - extracurricular activity signups over HTTP
//!
//! Students browse the activities offered by Mergington High School and sign
//! up for or withdraw from them. The roster lives in memory:
//! - Typed seed data loaded once at startup
//! - Email validation and normalization on signup
//! - Capacity and duplicate checks serialized behind one lock
//! - Simple JSON HTTP API

pub mod api;
pub mod config;
pub mod email;
pub mod error;
pub mod roster;
pub mod types;

pub use error::{Error, Result};
