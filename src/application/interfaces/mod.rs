mod chat_client;
mod clock;

pub use chat_client::*;
pub use clock::*;
