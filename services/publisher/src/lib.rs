//! TEC map publisher library.
//!
//! One invocation performs a full publication run: discover the snapshots
//! the remote source has published for today, grid each one, derive a
//! display range, and write the versioned JSON documents the front end
//! reads. See [`publish::run`] for the top-level entry point.

pub mod config;
pub mod docs;
pub mod index;
pub mod manifest;
pub mod publish;
