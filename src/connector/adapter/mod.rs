mod mock_chat_client;
mod openai_chat_client;
mod tokio_clock;

pub use mock_chat_client::*;
pub use openai_chat_client::*;
pub use tokio_clock::*;
