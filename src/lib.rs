//! # Campus API
//!
//! A role-based campus management REST API built with Axum. Three roles
//! (admin, faculty, student) authenticate with JWT bearer tokens and
//! operate on users, attendance records, assignments and notices, with
//! every read narrowed by a per-role visibility filter.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Env-driven configuration (JWT, CORS, storage)
//! ├── middleware/       # Bearer-token extractor and role checks
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login, registration, demo-account seeding
//! │   ├── users/       # User listing and deletion
//! │   ├── attendance/  # Marking, listing, reporting
//! │   ├── assignments/ # Creation and student submissions
//! │   └── notices/     # Audience-targeted notice board
//! ├── store/            # JSON-file collection store
//! └── utils/            # Errors, JWT, password hashing
//! ```
//!
//! Each feature module follows the same structure: `model.rs` for
//! entities and DTOs, `service.rs` for business logic, `controller.rs`
//! for HTTP handlers and `router.rs` for route wiring.
//!
//! ## Persistence
//!
//! State lives as one JSON array file per entity type under the data
//! directory (`DATA_DIR`, default `./data`). Collections serialize their
//! read-modify-write cycles through a per-collection async mutex; see
//! [`store`] for the contract.
//!
//! ## Authentication
//!
//! Login issues a signed token carrying the caller's identity claims
//! (id, name, email, role, department) with a 24-hour expiry. There is
//! no refresh mechanism; expiry forces a re-login. Role checks are exact
//! allowed sets per route, not a hierarchy.

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod utils;
pub mod validator;
