// src/ui/mod.rs
pub mod editor;
pub mod results;
