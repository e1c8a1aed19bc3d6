//! Financial records supplied by the persistence layer.
//!
//! These are opaque to the gateway beyond being serialized into prompts, so
//! they are plain data. Collections are ordered (`Vec`, `BTreeMap`) to keep
//! serialized output byte-identical for identical input.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: TransactionType,
}

impl Transaction {
    pub fn expense(
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            category: category.into(),
            kind: TransactionType::Expense,
        }
    }

    pub fn income(
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            kind: TransactionType::Income,
            ..Self::expense(date, description, amount, category)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsAccount {
    pub name: String,
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub name: String,
    /// Asset class, e.g. "stocks", "bonds", "etf", "real_estate".
    pub asset_type: String,
    pub amount_invested: f64,
    pub current_value: f64,
}

impl Investment {
    pub fn gain(&self) -> f64 {
        self.current_value - self.amount_invested
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Budget {
    pub monthly_limit: f64,
    /// Spending limit per category.
    #[serde(default)]
    pub categories: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InvestorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_income: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon_years: Option<u32>,
    #[serde(default)]
    pub objectives: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    #[default]
    Moderate,
    High,
}

impl RiskTolerance {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "low",
            RiskTolerance::Moderate => "moderate",
            RiskTolerance::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "conservative" => Some(RiskTolerance::Low),
            "moderate" | "medium" | "balanced" => Some(RiskTolerance::Moderate),
            "high" | "aggressive" => Some(RiskTolerance::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The bag of domain objects embedded in a general advice prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PromptContext {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub savings: Vec<SavingsAccount>,
    #[serde(default)]
    pub investments: Vec<Investment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
}

impl PromptContext {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
            && self.savings.is_empty()
            && self.investments.is_empty()
            && self.budget.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_defaults_to_expense() {
        let tx: Transaction = serde_json::from_str(
            r#"{"date":"2024-03-01","description":"Rent","amount":950.0,"category":"housing"}"#,
        )
        .unwrap();
        assert_eq!(tx.kind, TransactionType::Expense);
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn risk_tolerance_parses_synonyms() {
        assert_eq!(RiskTolerance::parse("Aggressive"), Some(RiskTolerance::High));
        assert_eq!(RiskTolerance::parse("balanced"), Some(RiskTolerance::Moderate));
        assert_eq!(RiskTolerance::parse(" low "), Some(RiskTolerance::Low));
        assert_eq!(RiskTolerance::parse("yolo"), None);
    }

    #[test]
    fn empty_context_is_detected() {
        let mut ctx = PromptContext::default();
        assert!(ctx.is_empty());
        ctx.budget = Some(Budget::default());
        assert!(!ctx.is_empty());
    }

    #[test]
    fn investment_gain() {
        let inv = Investment {
            name: "World ETF".into(),
            asset_type: "etf".into(),
            amount_invested: 1000.0,
            current_value: 1150.0,
        };
        assert_eq!(inv.gain(), 150.0);
    }
}
