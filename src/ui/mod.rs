//! Terminal output for the restyle binary
//!
//! Layered from design tokens (`theme`) up through primitives, widgets and
//! blocks to per-command views. `console` adapts the views to the rewrite
//! event port.

pub mod blocks;
pub mod components;
pub mod console;
pub mod context;
pub mod error;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
