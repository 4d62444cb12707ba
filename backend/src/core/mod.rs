//! Core building blocks shared by the queue, the sort engine and the recorder
//!
//! - **order**: ordering direction (ascending / descending)
//! - **value**: comparable elements and sequence parsing
//! - **time**: monotonic phase timing

pub mod order;
pub mod time;
pub mod value;
