pub mod create_version;
pub mod show;
