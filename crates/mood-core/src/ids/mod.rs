//! ID type wrappers for type safety.

mod id_macro;
pub mod session_id;

pub use session_id::SessionId;
