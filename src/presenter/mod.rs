//! Presentation of a reading
//!
//! Turns a [`ClassificationResult`](crate::ClassificationResult) into what
//! the user sees: a text report, a JSON document, a radial gauge image and
//! the photo itself stacked above that gauge.

pub mod composite;
pub mod gauge;
pub mod report;

pub use composite::{render_report, save_report};
pub use gauge::{Gauge, GaugeBand};
pub use report::{render_json, render_text, Labels};
