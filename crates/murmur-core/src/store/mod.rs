// ── In-memory stores ──
//
// Each store owns its raw records plus the relation table it needs and
// assembles viewer-relative snapshots on every read.

mod posts;
mod relation;
mod users;

pub use posts::PostStore;
pub use relation::RelationTable;
pub use users::UserStore;
