//! The directory core: normalization, grouping, and presentation of business
//! hiring records, plus the read-side HTTP handlers.
//!
//! `normalize` and `group` are pure and total — they perform no I/O, hold no
//! state, and never error. All upstream mess is absorbed at this boundary.

pub mod grouping;
pub mod handlers;
pub mod normalize;
pub mod render;
pub mod states;
pub mod text;
