pub mod handshake;
pub mod library;
pub mod profile;
pub mod scan;
