//! CLI operation handlers.
//!
//! - [`widget`]: runs the interactive popular-movies widget

pub mod widget;
