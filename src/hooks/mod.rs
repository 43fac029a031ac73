pub mod use_auth;
pub mod use_resource;

pub use use_auth::{dispatch_check, use_auth, UseAuthHandle};
pub use use_resource::{use_resource, ResourceState, UseResourceHandle};
