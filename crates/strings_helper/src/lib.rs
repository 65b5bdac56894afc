// crates/strings_helper/src/lib.rs

//! Substring search helpers: delimited extraction and containment checks.

pub mod between;
pub mod predicates;

pub use between::{
    get_string_between, segments_between, Between, BetweenError, BetweenOptions, SegmentsBetween,
};
pub use predicates::{contains_one_of, is_in};
