//! Stateless text tools
//!
//! Each tool is a pure function over its input; the HTTP layer maps them
//! onto `/api/tools/*` endpoints and reports failures in-band.

pub mod encode;
pub mod hash;
pub mod json_fmt;
pub mod time;
