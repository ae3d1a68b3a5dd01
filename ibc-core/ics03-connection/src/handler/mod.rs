pub mod open_connection;
pub mod update_connection;
