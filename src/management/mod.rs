mod auth;
mod session;

pub use auth::TokenManager;
pub use session::LookupSession;
pub use session::Ticket;
