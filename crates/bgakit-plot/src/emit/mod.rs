//! Concrete rendering backends for the footprint draw stream.
//!
//! Each backend is an independent adapter implementing
//! [`crate::FootprintSink`]; the generation algorithm stays format-blind.

mod eagle;
mod tsv;
mod xml;

pub use eagle::EagleScriptPlotter;
pub use tsv::TsvPlotter;
pub use xml::{XmlMetadata, XmlPlotter};
