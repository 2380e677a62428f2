//! Utility modules for Asset Fetch
//!
//! This module contains various utility functions organized by functionality:
//! - `files`: File operations and directory management
//! - `http`: HTTP client utilities

pub mod files;
pub mod http;
