//! Shared UI crate for Passmap: the play dataset, filtering and aggregation
//! core, and the dashboard components both launchers render.

pub mod controls;
pub mod core;
pub mod results;
pub mod views;

use dioxus::prelude::*;

/// Shared dashboard theme.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
