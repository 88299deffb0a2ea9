//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`layout`] - Responsive page shell (header, routed content, footer)
//! - [`nav_menu`] - Horizontal and inline navigation menu
//! - [`filters`] - Category filter controls
//! - [`map`] - Network and food-resource map
//! - [`list_view`] - Network cards next to the map
//! - [`table`] - Networks table route
//! - [`pages`] - Static pages, banner, footer and submit link
//! - [`icons`] - Centralized icon definitions

pub mod filters;
pub mod icons;
pub mod layout;
pub mod list_view;
pub mod map;
pub mod nav_menu;
pub mod pages;
pub mod router;
pub mod table;

pub use router::AppRouter;
