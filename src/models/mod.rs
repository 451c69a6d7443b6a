//! Data types exchanged with the object API.
//!
//! These are plain records: descriptors read back from the service, the
//! inputs of each operation, and the header vocabulary both directions share.

pub mod headers;
pub mod object;
pub mod requests;
