//! Command handlers for the restyle binary

pub mod rewrite;
