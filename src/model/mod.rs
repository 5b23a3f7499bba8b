pub mod collection;
pub mod config;
pub mod contact;
pub mod record;
pub mod session;
pub mod task;

pub use collection::*;
pub use config::*;
pub use contact::*;
pub use record::*;
pub use session::*;
pub use task::*;
