//! Block cipher modes of operation

pub mod pcbc;

pub use pcbc::Pcbc;
