pub mod profile;
pub mod scheme;
