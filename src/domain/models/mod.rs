mod completion;
mod error_kind;
mod finance;
mod message;
mod scenario;

pub use completion::*;
pub use error_kind::*;
pub use finance::*;
pub use message::*;
pub use scenario::*;
