//! Core types for crudmongo.
//!
//! Holds the `Item` domain type and the storage-agnostic repository contract.
//! Nothing in this crate performs I/O; storage backends live in the
//! `crudmongo` binary crate.

pub mod item;
pub mod storage;
