pub mod delete;
pub mod purge;
pub mod record_change;

pub use delete::DeleteAuditEntryResponse;
pub use purge::PurgeResponse;
