//! Preparation of line-of-sight reddening queries.
//!
//! The query form has two text fields and a coordinate-system toggle. This
//! crate turns what was typed (or where a postage stamp was clicked) into the
//! galactic `{l, b}` body that is posted to the server.

pub mod error;
pub mod request;

pub use error::{QueryError, QueryWarning};
pub use request::{CoordSystem, PreparedQuery, QueryRequest, prepare_query, prepare_stamp_query};
