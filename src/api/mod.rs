pub mod gateway;
pub mod modrinth;
