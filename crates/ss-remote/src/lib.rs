//! Mediator HTTP client for ShelfSwap.
//!
//! The one adapter behind `MediatorPort`: three endpoints, JSON in and out,
//! every failure translated into a typed mediator error before it leaves
//! this crate.

pub mod client;
pub mod dto;

pub use client::HttpMediatorClient;
