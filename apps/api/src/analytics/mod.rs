//! Aggregate counts over stored resumes, shaped for charting.

pub mod charts;
pub mod handlers;
pub mod queries;
