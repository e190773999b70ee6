//! Property tests for the public API.

mod queries;
mod tree;
