//! Categorical prior distributions over particle attributes.
//!
//! Shoreline surveys report raw counts per shape and polymer category;
//! this crate turns those counts into normalized probability tables that
//! the Monte Carlo engine samples from.

pub mod prior;


pub use prior::{PriorDistribution, PriorError};
