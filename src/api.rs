//! Endpoint wrappers grouped by backend app.
//!
//! Each module adds an `impl` block on [`ApiClient`](crate::client::ApiClient) covering one
//! backend app's routes: authentication, property listings, travel bookings, and messaging.
//! Paths and auth requirements follow the backend contract; wrappers build a
//! [`RequestDescriptor`](crate::request::RequestDescriptor) and hand it to the executor.

pub mod auth;
pub mod messaging;
pub mod properties;
pub mod travel;
