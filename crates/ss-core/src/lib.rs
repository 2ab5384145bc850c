//! # ss-core
//!
//! Core domain models and business logic for ShelfSwap.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod handshake;
pub mod ids;
pub mod library;
pub mod ports;
pub mod token;

// Re-export commonly used types at the crate root
pub use config::{AppConfig, MediatorConfig, PollConfig};
pub use handshake::{
    HandshakeError, ResolutionTracker, TransactionAction, TransactionIntent, TransactionOutcome,
};
pub use ids::{BookId, ShareId, UserId};
pub use library::{Book, UserProfile};
pub use token::ScannedToken;
