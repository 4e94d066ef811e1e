//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: reading the session,
//! redirecting, and calling the backend.

pub mod dashboard;
pub mod landing;
pub mod login;
