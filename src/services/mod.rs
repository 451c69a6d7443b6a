//! Object operations and the translation layer underneath them.

pub mod identifier;
pub mod marshal;
pub mod object_service;
