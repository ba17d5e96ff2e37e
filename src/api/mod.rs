//! HTTP surface for the batch sorters
//!
//! Thin JSON wrapper: decode the request, run the selected strategy, encode
//! its outcome verbatim.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use dto::{SortRequest, SortResponse};
pub use error::{ApiError, ErrorResponse};
pub use router::create_router;
pub use state::AppState;
