pub mod dashboard;
pub mod kind;
pub mod revision;

pub use dashboard::DashboardView;
pub use kind::{aggregate_kinds, BucketKey, KindCount};
pub use revision::{resolve_revisions, IndexRevision};
