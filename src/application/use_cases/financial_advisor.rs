use std::sync::Arc;

use tracing::info;

use crate::application::AdvisorClient;
use crate::domain::{
    DomainError, InvestorProfile, Investment, PromptBuilder, PromptContext, RiskTolerance,
    SavingsGoal, ScenarioInput, Transaction,
};

/// Public entry points: one per advice scenario.
///
/// Each call builds the scenario's prompt and hands it to the shared
/// [`AdvisorClient`]. A call either returns the full advice text or fails
/// with a classified error; there is no partial result.
pub struct FinancialAdvisor {
    client: Arc<AdvisorClient>,
}

impl FinancialAdvisor {
    pub fn new(client: Arc<AdvisorClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, input: &ScenarioInput) -> Result<String, DomainError> {
        info!("Generating {}", input.scenario());
        let messages = PromptBuilder::build(input)?;
        self.client.generate_response(&messages).await
    }

    pub async fn generate_financial_advice(
        &self,
        context: &PromptContext,
        query: &str,
    ) -> Result<String, DomainError> {
        let messages = PromptBuilder::financial_advice(context, query)?;
        self.client.generate_response(&messages).await
    }

    pub async fn generate_spending_analysis(
        &self,
        transactions: &[Transaction],
    ) -> Result<String, DomainError> {
        let messages = PromptBuilder::spending_analysis(transactions)?;
        self.client.generate_response(&messages).await
    }

    pub async fn generate_savings_suggestions(
        &self,
        income: f64,
        expenses: f64,
        savings: f64,
        goals: &[SavingsGoal],
    ) -> Result<String, DomainError> {
        let messages = PromptBuilder::savings_suggestions(income, expenses, savings, goals)?;
        self.client.generate_response(&messages).await
    }

    pub async fn generate_investment_advice(
        &self,
        profile: &InvestorProfile,
        current_investments: &[Investment],
        risk_tolerance: RiskTolerance,
    ) -> Result<String, DomainError> {
        let messages =
            PromptBuilder::investment_advice(profile, current_investments, risk_tolerance)?;
        self.client.generate_response(&messages).await
    }

    pub async fn generate_financial_forecast(
        &self,
        transactions: &[Transaction],
        income: f64,
        expenses: f64,
        savings: f64,
        investments: &[Investment],
    ) -> Result<String, DomainError> {
        let messages =
            PromptBuilder::financial_forecast(transactions, income, expenses, savings, investments)?;
        self.client.generate_response(&messages).await
    }
}
