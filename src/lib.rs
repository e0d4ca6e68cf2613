#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod metrics;
pub mod movie;
pub mod prng;
pub mod server;

pub use catalog::{Catalog, ListParams, MovieSource, ReleasePage};
pub use config::Config;
pub use dashboard::{Dashboard, ReleaseDetail, ReleaseRow, ReleaseTable};
pub use error::{DashboardError, Result};
pub use metrics::{derive_seed, generate_row, generate_row_with, EngagementMetrics};
pub use prng::{RightShift, Xorshift32};
pub use server::build_router;
