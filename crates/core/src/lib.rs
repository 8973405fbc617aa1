//! Domain types and pure logic for the spreadsheet story importer.
//!
//! Nothing here touches the network or the filesystem. The pipeline in
//! `sheetplay-importer` wires these pieces to a [`ports::RowSource`].

pub mod cell;
pub mod error;
pub mod merge;
pub mod models;
pub mod ports;
pub mod readers;
pub mod render;
