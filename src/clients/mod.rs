pub mod chat;
pub mod flexible;
pub mod mock;
pub mod models;
pub mod recording;

pub use chat::*;
pub use flexible::*;
pub use mock::*;
pub use models::*;
pub use recording::*;
