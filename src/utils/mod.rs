//! Utility modules for timestamp.
//!
//! - [`datetime`] - Epoch days, ordinal dates and zone-less input layouts
//! - [`newbase60`] - The sexagesimal codec used for epoch days

pub mod datetime;
pub mod newbase60;
