//! Flows module - End-to-end commands built from the core and words modules

pub mod count;
