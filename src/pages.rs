//! Page generation modules
//!
//! Each page module handles its specific view logic and utilizes shared
//! components from the components module. The site currently consists of
//! the single sponsors page.

pub mod sponsors;
