//! MCP tool handlers for the pastoral-care server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod follow_ups;
pub mod set_follow_up;
pub mod summary;
pub mod timeline;
pub mod toggle_follow_up;
