pub mod entries;
pub mod profile;
pub mod section;
