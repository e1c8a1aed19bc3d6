mod advisor_client;
mod financial_advisor;
mod rate_limiter;

pub use advisor_client::*;
pub use financial_advisor::*;
pub use rate_limiter::*;
