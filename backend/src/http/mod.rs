//! HTTP server module.
//!
//! An axum-based REST API over the scheduling store.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - JSON decoding and request validation                   │
//! │  - CORS, compression, tracing, error mapping              │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (db::services)                             │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Store (db::repositories::LocalRepository)                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/health` | [`handlers::health_check`] |
//! | POST | `/classes` | [`handlers::create_class`] |
//! | GET | `/classes` | [`handlers::list_classes`] |
//! | POST | `/bookings` | [`handlers::book_class`] |
//! | GET | `/bookings/{class_date}` | [`handlers::get_bookings_by_date`] |

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
