//! Silk Mist Core - Domain types for the storefront.
//!
//! This crate holds the cart state machine and the value types it is built
//! from. It contains no I/O, no sessions, no HTTP - the storefront binary
//! layers persistence and rendering on top of it.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product ids and prices
//! - [`cart`] - The cart state machine ([`cart::CartStore`])

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{CartItem, CartStore};
pub use types::*;
