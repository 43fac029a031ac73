pub mod auth_store;

pub use auth_store::{next_seq, AuthAction, AuthContext, AuthStore};
