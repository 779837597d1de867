//! User Use Cases
//!
//! Registration, credential checks and profile lookup.

mod authenticate_user;
mod get_user_by_id;
mod register_user;

pub use authenticate_user::AuthenticateUserUseCase;
pub use get_user_by_id::GetUserByIdUseCase;
pub use register_user::{RegisterUser, RegisterUserUseCase};
