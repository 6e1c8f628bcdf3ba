//! UI module - reusable widgets and layout helpers

pub mod components;
