//! # Studio Scheduler
//!
//! In-memory class scheduling for a fitness studio. Administrators create
//! classes that run over a date window; members book a class on a date.
//!
//! ## Architecture
//!
//! - [`models`]: domain types (classes, bookings, canonical dates)
//! - [`db`]: the scheduling store: repository traits, the in-memory
//!   catalog and ledger, and the service layer
//! - [`validation`]: explicit per-request field validation
//! - [`api`]: request/response shapes
//! - [`config`]: TOML and environment configuration
//! - [`http`]: axum-based REST API (feature `http-server`)
//!
//! ## Store rules
//!
//! - Two classes with the same (case-insensitive) name may not have
//!   colliding windows; class IDs are sequential from 1.
//! - Bookings are never rejected by the store. The catalog is consulted only
//!   for the first booking of a (date, class) pair.
//! - Both collections are guarded by reader/writer locks; every write runs its
//!   whole check-then-write sequence under the exclusive lock.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod validation;

#[cfg(feature = "http-server")]
pub mod http;
