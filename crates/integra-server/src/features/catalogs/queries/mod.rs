pub mod list_faculties;
pub mod list_schools;

pub use list_schools::ListSchoolsQuery;
