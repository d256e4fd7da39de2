//! Concrete repository implementations.

pub mod account;
pub mod post;
pub mod session;

pub use account::AccountRepository;
pub use post::PostRepository;
pub use session::SessionRepository;
