pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{AdvisorClient, ChatClient, Clock, FinancialAdvisor, RateLimiter};

pub use cli::Commands;

pub use connector::{MockChatClient, OpenAiChatClient, OpenAiConfig, TokioClock};

pub use domain::{
    Budget, CompletionFailure, DomainError, ErrorKind, InvestorProfile, Investment, Message,
    PromptBuilder, PromptContext, RetryPolicy, RiskTolerance, Role, SavingsAccount, SavingsGoal,
    Scenario, ScenarioInput, Transaction, TransactionType,
};
