pub mod activity;
pub mod distinct;
pub mod get;
pub mod history;
pub mod latest;
pub mod list;
pub mod monthly_summary;
pub mod recent;
pub mod search;
pub mod statistics;
pub mod text_search;
pub mod user_changes;

pub use activity::ReservationActivity;
pub use recent::RecentChangesQuery;
pub use text_search::TextSearchQuery;
pub use user_changes::UserChangesQuery;
