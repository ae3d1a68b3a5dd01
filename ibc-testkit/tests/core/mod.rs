pub mod ics03_connection;
pub mod ics04_channel;
pub mod router;
