//! Core domain types for brandkit.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.
//!
//! - **`brand`**: [`Brand<K, T>`], a zero-cost nominal wrapper
//! - **`currency`**: USD/EUR amounts, exchange rates, the amount parser
//! - **`entity`**: users and posts keyed by branded ids

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod brand;
mod currency;
mod entity;

pub use brand::{Brand, BrandTag};
pub use currency::{
    AmountParseError, Eur, EurAmount, ExchangeRate, ExchangeRateError, Usd, UsdAmount,
    convert_eur_to_usd, euro_to_usd, parse_amount,
};
pub use entity::{
    FlatPost, FlatUser, Post, PostId, PostTag, Record, RecordId, User, UserId, UserTag,
};
