//! Request and response types for the dashboard backends.
//!
//! This module contains the strongly-typed structs used for deserializing
//! upstream payloads and for the rendering-ready values this crate produces.
//!
//! ## Organization
//!
//! - [`enums`]: Shared enumerations (timeframes, leader lists, market-cap tiers)
//! - [`chart`]: Intraday/daily samples, chart points, price change
//! - [`quote`]: Full quote, Finnhub quote, price-change table
//! - [`company`]: Company profile
//! - [`market`]: Market leaders, screener rows, sector performance, symbols
//! - [`news`]: News articles
//! - [`signals`]: ML risk signals and drivers
//! - [`de`]: Lenient deserializers for string-encoded numbers and dates
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod chart;
pub mod company;
pub mod de;
pub mod enums;
pub mod market;
pub mod news;
pub mod quote;
pub mod signals;

pub use enums::*;
