use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::de::DeserializeOwned;

use crate::domain::{
    InvestorProfile, Investment, PromptContext, RiskTolerance, SavingsGoal, ScenarioInput,
    Transaction,
};

use super::super::Container;

pub struct AdviceController<'a> {
    container: &'a Container,
}

impl<'a> AdviceController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn advice(&self, query: String, context: Option<PathBuf>) -> Result<String> {
        let context: PromptContext = load_optional(context.as_deref())?;
        self.run(ScenarioInput::FinancialAdvice { context, query })
            .await
    }

    pub async fn spending(&self, transactions: PathBuf) -> Result<String> {
        let transactions: Vec<Transaction> = load_json(&transactions)?;
        self.run(ScenarioInput::SpendingAnalysis { transactions })
            .await
    }

    pub async fn savings(
        &self,
        income: f64,
        expenses: f64,
        savings: f64,
        goals: Option<PathBuf>,
    ) -> Result<String> {
        let goals: Vec<SavingsGoal> = load_optional(goals.as_deref())?;
        self.run(ScenarioInput::SavingsSuggestions {
            income,
            expenses,
            savings,
            goals,
        })
        .await
    }

    pub async fn invest(
        &self,
        profile: PathBuf,
        investments: Option<PathBuf>,
        risk: String,
    ) -> Result<String> {
        let profile: InvestorProfile = load_json(&profile)?;
        let current_investments: Vec<Investment> = load_optional(investments.as_deref())?;
        let risk_tolerance = RiskTolerance::parse(&risk)
            .with_context(|| format!("unknown risk tolerance '{risk}' (expected low, moderate or high)"))?;
        self.run(ScenarioInput::InvestmentAdvice {
            profile,
            current_investments,
            risk_tolerance,
        })
        .await
    }

    pub async fn forecast(
        &self,
        transactions: PathBuf,
        income: f64,
        expenses: f64,
        savings: f64,
        investments: Option<PathBuf>,
    ) -> Result<String> {
        let transactions: Vec<Transaction> = load_json(&transactions)?;
        let investments: Vec<Investment> = load_optional(investments.as_deref())?;
        self.run(ScenarioInput::FinancialForecast {
            transactions,
            income,
            expenses,
            savings,
            investments,
        })
        .await
    }

    async fn run(&self, input: ScenarioInput) -> Result<String> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!(
            "Asking {} for {}...",
            self.container.model(),
            input.scenario()
        ));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.container.advisor().execute(&input).await;
        spinner.finish_and_clear();

        Ok(result?)
    }
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn load_optional<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    match path {
        Some(path) => load_json(path),
        None => Ok(T::default()),
    }
}
