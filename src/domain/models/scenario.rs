use serde::{Deserialize, Serialize};

use super::{InvestorProfile, Investment, PromptContext, RiskTolerance, SavingsGoal, Transaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    FinancialAdvice,
    SpendingAnalysis,
    SavingsSuggestions,
    InvestmentAdvice,
    FinancialForecast,
}

impl Scenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::FinancialAdvice => "financial_advice",
            Scenario::SpendingAnalysis => "spending_analysis",
            Scenario::SavingsSuggestions => "savings_suggestions",
            Scenario::InvestmentAdvice => "investment_advice",
            Scenario::FinancialForecast => "financial_forecast",
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed inputs for one advice scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scenario", rename_all = "snake_case")]
pub enum ScenarioInput {
    FinancialAdvice {
        context: PromptContext,
        query: String,
    },
    SpendingAnalysis {
        transactions: Vec<Transaction>,
    },
    SavingsSuggestions {
        income: f64,
        expenses: f64,
        savings: f64,
        goals: Vec<SavingsGoal>,
    },
    InvestmentAdvice {
        profile: InvestorProfile,
        current_investments: Vec<Investment>,
        risk_tolerance: RiskTolerance,
    },
    FinancialForecast {
        transactions: Vec<Transaction>,
        income: f64,
        expenses: f64,
        savings: f64,
        investments: Vec<Investment>,
    },
}

impl ScenarioInput {
    pub fn scenario(&self) -> Scenario {
        match self {
            ScenarioInput::FinancialAdvice { .. } => Scenario::FinancialAdvice,
            ScenarioInput::SpendingAnalysis { .. } => Scenario::SpendingAnalysis,
            ScenarioInput::SavingsSuggestions { .. } => Scenario::SavingsSuggestions,
            ScenarioInput::InvestmentAdvice { .. } => Scenario::InvestmentAdvice,
            ScenarioInput::FinancialForecast { .. } => Scenario::FinancialForecast,
        }
    }
}
