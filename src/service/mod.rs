//! Admin operations over an injected store.
//!
//! Each service owns its store and exposes an explicit `refresh` that reads a
//! fresh snapshot; nothing is cached between calls.

mod blog;
mod codes;
mod stats;

pub use blog::{BlogFilter, BlogService, PublishStatus, categories};
pub use codes::{CodeFilter, CodeListing, PromoCodeService, parse_code_lines};
pub use stats::StatsService;
