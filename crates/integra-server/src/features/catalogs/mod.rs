//! Faculty and school catalog lookups

pub mod queries;
pub mod routes;

pub use queries::ListSchoolsQuery;
pub use routes::catalog_routes;
