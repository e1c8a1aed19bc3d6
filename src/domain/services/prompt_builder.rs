use crate::domain::{
    DomainError, InvestorProfile, Investment, Message, PromptContext, RiskTolerance, SavingsGoal,
    ScenarioInput, Transaction,
};

const ADVISOR_PROMPT: &str = "\
You are a personal finance assistant. You give clear, practical and prudent advice \
based only on the user's financial data provided below.

Rules:
1. Refer to concrete figures from the data when they support your advice.
2. Keep the answer structured and concise; use short bullet points.
3. Never recommend specific securities; stay at the level of asset classes and habits.
4. If the data is insufficient to answer, say what is missing.";

const SPENDING_PROMPT: &str = "\
You are a spending analyst. Review the user's transactions and identify \
spending patterns, the largest categories, unusual or recurring expenses, \
and concrete ways to reduce costs. Answer with short sections and bullet points.";

const SAVINGS_PROMPT: &str = "\
You are a savings coach. From the user's monthly income, expenses, current \
savings and goals, propose a realistic savings plan: a monthly amount to set \
aside, an order of priority between goals, and an emergency-fund recommendation.";

const INVESTMENT_PROMPT: &str = "\
You are an investment advisor. From the investor profile, the current portfolio \
and the stated risk tolerance, suggest a suitable allocation between asset classes, \
highlight concentration risks, and explain the trade-offs. Do not name individual securities.";

const FORECAST_PROMPT: &str = "\
You are a financial forecaster. From the user's transaction history, income, \
expenses, savings and investments, project the user's financial situation over the \
next 3, 6 and 12 months. State your assumptions and give one short recommendation per horizon.";

const SPENDING_QUERY: &str =
    "Analyze my spending and tell me where I can cut back.";

/// Assembles the ordered message sequence for each advice scenario.
///
/// Pure and deterministic: identical inputs produce byte-identical output.
/// Layout is always instruction system message, then the context system
/// message when the scenario carries one, then exactly one user message.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(input: &ScenarioInput) -> Result<Vec<Message>, DomainError> {
        match input {
            ScenarioInput::FinancialAdvice { context, query } => {
                Self::financial_advice(context, query)
            }
            ScenarioInput::SpendingAnalysis { transactions } => {
                Self::spending_analysis(transactions)
            }
            ScenarioInput::SavingsSuggestions {
                income,
                expenses,
                savings,
                goals,
            } => Self::savings_suggestions(*income, *expenses, *savings, goals),
            ScenarioInput::InvestmentAdvice {
                profile,
                current_investments,
                risk_tolerance,
            } => Self::investment_advice(profile, current_investments, *risk_tolerance),
            ScenarioInput::FinancialForecast {
                transactions,
                income,
                expenses,
                savings,
                investments,
            } => Self::financial_forecast(transactions, *income, *expenses, *savings, investments),
        }
    }

    pub fn financial_advice(
        context: &PromptContext,
        query: &str,
    ) -> Result<Vec<Message>, DomainError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(DomainError::invalid_input("query must not be empty"));
        }

        Ok(vec![
            Message::system(ADVISOR_PROMPT),
            Message::system(format!(
                "User financial data (JSON):\n{}",
                serde_json::to_string(context)?
            )),
            Message::user(query),
        ])
    }

    pub fn spending_analysis(transactions: &[Transaction]) -> Result<Vec<Message>, DomainError> {
        Ok(vec![
            Message::system(SPENDING_PROMPT),
            Message::system(format!(
                "Transactions (JSON):\n{}",
                serde_json::to_string(transactions)?
            )),
            Message::user(SPENDING_QUERY),
        ])
    }

    pub fn savings_suggestions(
        income: f64,
        expenses: f64,
        savings: f64,
        goals: &[SavingsGoal],
    ) -> Result<Vec<Message>, DomainError> {
        ensure_finite("income", income)?;
        ensure_finite("expenses", expenses)?;
        ensure_finite("savings", savings)?;

        let prompt = format!(
            "Monthly income: {income:.2}\n\
             Monthly expenses: {expenses:.2}\n\
             Current savings: {savings:.2}\n\
             Savings goals (JSON): {}\n\
             How should I organize my savings to reach these goals?",
            serde_json::to_string(goals)?
        );

        Ok(vec![Message::system(SAVINGS_PROMPT), Message::user(prompt)])
    }

    pub fn investment_advice(
        profile: &InvestorProfile,
        current_investments: &[Investment],
        risk_tolerance: RiskTolerance,
    ) -> Result<Vec<Message>, DomainError> {
        let prompt = format!(
            "Investor profile (JSON): {}\n\
             Current investments (JSON): {}\n\
             Risk tolerance: {risk_tolerance}\n\
             What investment strategy do you recommend?",
            serde_json::to_string(profile)?,
            serde_json::to_string(current_investments)?,
        );

        Ok(vec![Message::system(INVESTMENT_PROMPT), Message::user(prompt)])
    }

    pub fn financial_forecast(
        transactions: &[Transaction],
        income: f64,
        expenses: f64,
        savings: f64,
        investments: &[Investment],
    ) -> Result<Vec<Message>, DomainError> {
        ensure_finite("income", income)?;
        ensure_finite("expenses", expenses)?;
        ensure_finite("savings", savings)?;

        let prompt = format!(
            "Transaction history (JSON): {}\n\
             Monthly income: {income:.2}\n\
             Monthly expenses: {expenses:.2}\n\
             Current savings: {savings:.2}\n\
             Investments (JSON): {}\n\
             Forecast my financial situation.",
            serde_json::to_string(transactions)?,
            serde_json::to_string(investments)?,
        );

        Ok(vec![Message::system(FORECAST_PROMPT), Message::user(prompt)])
    }
}

fn ensure_finite(name: &str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::invalid_input(format!(
            "{name} must be a finite number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{Budget, Role, SavingsAccount};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction::income(date(2024, 3, 1), "Salary", 3200.0, "salary"),
            Transaction::expense(date(2024, 3, 2), "Rent", 950.0, "housing"),
            Transaction::expense(date(2024, 3, 5), "Groceries", 84.3, "food"),
        ]
    }

    fn sample_investments() -> Vec<Investment> {
        vec![Investment {
            name: "World ETF".into(),
            asset_type: "etf".into(),
            amount_invested: 5000.0,
            current_value: 5400.0,
        }]
    }

    fn sample_inputs() -> Vec<ScenarioInput> {
        let mut budget = Budget {
            monthly_limit: 2000.0,
            ..Default::default()
        };
        budget.categories.insert("food".into(), 300.0);
        budget.categories.insert("leisure".into(), 150.0);

        vec![
            ScenarioInput::FinancialAdvice {
                context: PromptContext {
                    transactions: sample_transactions(),
                    savings: vec![SavingsAccount {
                        name: "Livret A".into(),
                        balance: 4200.0,
                        interest_rate: Some(3.0),
                    }],
                    investments: sample_investments(),
                    budget: Some(budget),
                },
                query: "Can I afford a new car?".into(),
            },
            ScenarioInput::SpendingAnalysis {
                transactions: sample_transactions(),
            },
            ScenarioInput::SavingsSuggestions {
                income: 3200.0,
                expenses: 2100.0,
                savings: 4200.0,
                goals: vec![SavingsGoal {
                    name: "Holidays".into(),
                    target_amount: 1500.0,
                    current_amount: 300.0,
                    deadline: Some(date(2024, 7, 1)),
                }],
            },
            ScenarioInput::InvestmentAdvice {
                profile: InvestorProfile {
                    age: Some(34),
                    annual_income: Some(38_400.0),
                    horizon_years: Some(15),
                    objectives: vec!["retirement".into()],
                },
                current_investments: sample_investments(),
                risk_tolerance: RiskTolerance::Moderate,
            },
            ScenarioInput::FinancialForecast {
                transactions: sample_transactions(),
                income: 3200.0,
                expenses: 2100.0,
                savings: 4200.0,
                investments: sample_investments(),
            },
        ]
    }

    fn roles(messages: &[Message]) -> Vec<Role> {
        messages.iter().map(|m| m.role()).collect()
    }

    #[test]
    fn build_is_deterministic() {
        for input in sample_inputs() {
            let first = serde_json::to_vec(&PromptBuilder::build(&input).unwrap()).unwrap();
            let second = serde_json::to_vec(&PromptBuilder::build(&input.clone()).unwrap()).unwrap();
            assert_eq!(first, second, "{}", input.scenario());
        }
    }

    #[test]
    fn every_sequence_ends_with_one_user_message() {
        for input in sample_inputs() {
            let messages = PromptBuilder::build(&input).unwrap();
            let user_count = messages.iter().filter(|m| m.role() == Role::User).count();
            assert_eq!(user_count, 1, "{}", input.scenario());
            assert_eq!(messages.last().map(|m| m.role()), Some(Role::User));
            assert!(messages[..messages.len() - 1]
                .iter()
                .all(|m| m.role() == Role::System));
        }
    }

    #[test]
    fn financial_advice_carries_context_then_query() {
        let inputs = sample_inputs();
        let messages = PromptBuilder::build(&inputs[0]).unwrap();

        assert_eq!(roles(&messages), vec![Role::System, Role::System, Role::User]);
        assert!(messages[1].content().contains("\"Livret A\""));
        assert!(messages[1].content().contains("\"monthly_limit\":2000.0"));
        assert_eq!(messages[2].content(), "Can I afford a new car?");
    }

    #[test]
    fn financial_advice_rejects_blank_query() {
        let err = PromptBuilder::financial_advice(&PromptContext::default(), "   ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn spending_analysis_embeds_transactions() {
        let messages = PromptBuilder::spending_analysis(&sample_transactions()).unwrap();

        assert_eq!(roles(&messages), vec![Role::System, Role::System, Role::User]);
        assert!(messages[1].content().contains("\"Groceries\""));
        assert!(messages[1].content().contains("\"type\":\"income\""));
        assert_eq!(messages[2].content(), SPENDING_QUERY);
    }

    #[test]
    fn savings_suggestions_is_a_single_user_message() {
        let inputs = sample_inputs();
        let messages = PromptBuilder::build(&inputs[2]).unwrap();

        assert_eq!(roles(&messages), vec![Role::System, Role::User]);
        let prompt = messages[1].content();
        assert!(prompt.contains("Monthly income: 3200.00"));
        assert!(prompt.contains("Monthly expenses: 2100.00"));
        assert!(prompt.contains("Current savings: 4200.00"));
        assert!(prompt.contains("\"Holidays\""));
    }

    #[test]
    fn savings_suggestions_rejects_non_finite_numbers() {
        let err = PromptBuilder::savings_suggestions(f64::NAN, 1.0, 1.0, &[]).unwrap_err();
        assert!(err.to_string().contains("income"));
    }

    #[test]
    fn investment_advice_mentions_risk_tolerance() {
        let messages = PromptBuilder::investment_advice(
            &InvestorProfile::default(),
            &sample_investments(),
            RiskTolerance::High,
        )
        .unwrap();

        assert_eq!(roles(&messages), vec![Role::System, Role::User]);
        assert!(messages[1].content().contains("Risk tolerance: high"));
        assert!(messages[1].content().contains("\"World ETF\""));
    }

    #[test]
    fn forecast_includes_all_inputs() {
        let inputs = sample_inputs();
        let messages = PromptBuilder::build(&inputs[4]).unwrap();

        assert_eq!(roles(&messages), vec![Role::System, Role::User]);
        let prompt = messages[1].content();
        assert!(prompt.contains("\"Rent\""));
        assert!(prompt.contains("Monthly income: 3200.00"));
        assert!(prompt.contains("\"current_value\":5400.0"));
    }
}
