#![allow(clippy::module_inception)]

#[macro_use]
extern crate log;

pub mod connection;
pub mod errors;
pub mod protocols;
pub mod storage;
pub mod transport;

pub use messages;
