//! Spreadsheet-to-ERP-CSV conversion core
//!
//! This module converts decoded MOMO order exports into the fixed-schema
//! CSV the Omni ERP import job understands: classify the sheet once, map
//! each row onto the shipment or return record shape, project onto the
//! 42-column schema, and serialize with the import's quoting rules.

pub mod dates;
pub mod engine;
pub mod excel;
pub mod schema;
pub mod serialize;
pub mod types;

pub use engine::{classify, convert, map_row};
pub use excel::read_order_rows;
pub use types::*;
