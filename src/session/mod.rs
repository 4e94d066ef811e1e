//! Client-side session model.
//!
//! DESIGN
//! ======
//! `storage` abstracts the key-value backend, `store` owns the persisted
//! record and its derivations, `token` inspects access-token expiry, and
//! `guard` turns session state into route decisions. Everything here is
//! synchronous and storage-injected so it runs natively under test.

pub mod guard;
pub mod storage;
pub mod store;
pub mod token;
pub mod user_info;

pub use guard::{GuardDecision, RouteRequirement, guard_route, landing_redirect, login_route_redirect, post_login_redirect};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage, StorageError};
pub use store::{AuthValidation, Role, SessionError, SessionPhase, SessionStore};
pub use token::{Claims, Clock, FixedClock, SystemClock, decode_token, is_token_expired};
pub use user_info::{UserInfo, UserType};
