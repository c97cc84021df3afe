pub mod people;
pub mod server;
