//! Headless state behind the prompt gallery screen.
//!
//! Rendering is left to the embedding frontend; everything here is plain
//! data plus the actions a user can trigger.

pub mod clipboard;
pub mod combobox;
pub mod enhancer;
pub mod form;
pub mod gallery;
pub mod modal;
pub mod telemetry;
pub mod toast;
