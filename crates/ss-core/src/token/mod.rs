//! Hand-off token transport codec.

pub mod codec;

pub use codec::{decode, encode_share_code, ScannedToken};
