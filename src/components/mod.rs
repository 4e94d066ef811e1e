//! Reusable UI building blocks shared across pages.

pub mod protected_route;
