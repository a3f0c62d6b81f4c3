//! Multi-threaded multiplication.
//!
//! A job runs in three steps:
//! - `plan`: validate the inputs, allocate the zeroed result, split its rows
//!   into contiguous ranges (at most one per row)
//! - `worker`: compute one range of result rows into an exclusive block
//! - `dispatch`: spawn one scoped thread per range and join them all
//!
//! Workers own disjoint row blocks of the result buffer, so the only
//! synchronization is the final join.

pub mod dispatch;
pub mod plan;
pub mod worker;
