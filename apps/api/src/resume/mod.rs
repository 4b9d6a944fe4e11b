// Resume ingestion: document → text → analysis. Feeds question selection and the report.

pub mod analyzer;
pub mod extract;
pub mod handlers;
