//! HTTP adapter for registration and login.

mod dto;
mod handlers;
mod routes;

pub use dto::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
pub use handlers::AuthHandlers;
pub use routes::auth_routes;
