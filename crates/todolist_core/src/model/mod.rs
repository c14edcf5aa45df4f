//! Domain model for to-do lists and their items.
//!
//! # Responsibility
//! - Define the entity shapes returned by the stores and serialized by the
//!   HTTP boundary.
//! - Own the field constraints shared by every write path.
//!
//! # Invariants
//! - Ids are assigned by storage; callers never choose them on create.
//! - An item belongs to at most one list; `list_id = None` means unassigned.

pub mod dto;
pub mod item;
pub mod list;
pub mod validation;
