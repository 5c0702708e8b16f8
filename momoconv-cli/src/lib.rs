//! MOMO order-export to Omni ERP import CSV conversion

pub mod cli;
pub mod convert;
