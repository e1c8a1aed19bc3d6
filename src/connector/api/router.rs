use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::AdviceController;

pub struct Router<'a> {
    advice_controller: AdviceController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            advice_controller: AdviceController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Advice { query, context } => {
                self.advice_controller.advice(query, context).await
            }
            Commands::Spending { transactions } => {
                self.advice_controller.spending(transactions).await
            }
            Commands::Savings {
                income,
                expenses,
                savings,
                goals,
            } => {
                self.advice_controller
                    .savings(income, expenses, savings, goals)
                    .await
            }
            Commands::Invest {
                profile,
                investments,
                risk,
            } => self.advice_controller.invest(profile, investments, risk).await,
            Commands::Forecast {
                transactions,
                income,
                expenses,
                savings,
                investments,
            } => {
                self.advice_controller
                    .forecast(transactions, income, expenses, savings, investments)
                    .await
            }
        }
    }
}
