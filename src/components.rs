//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the page
//! composition: the per-sponsor detail block, the tier section, and the
//! page chrome (layout wrapper and footer).

pub mod detail;
pub mod footer;
pub mod layout;
pub mod tier;
