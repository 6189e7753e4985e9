//! Analytes, result levels and their fixed reference colors
//!
//! Each analyte owns one [`ReferenceTable`] of four colors, one per
//! [`Level`], stored in severity order.

pub mod analyte;
pub mod level;
pub mod table;

pub use analyte::Analyte;
pub use level::Level;
pub use table::{ReferenceEntry, ReferenceTable, GLUCOSE_REFERENCE, PROTEIN_REFERENCE};
