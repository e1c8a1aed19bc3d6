use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a free-text question using the user's financial data as context
    Advice {
        query: String,

        /// JSON file with transactions, savings, investments and budget
        #[arg(short, long)]
        context: Option<PathBuf>,
    },

    /// Analyze spending patterns from a list of transactions
    Spending {
        /// JSON file holding an array of transactions
        #[arg(short, long)]
        transactions: PathBuf,
    },

    /// Suggest a savings plan from income, expenses, savings and goals
    Savings {
        #[arg(long)]
        income: f64,

        #[arg(long)]
        expenses: f64,

        #[arg(long)]
        savings: f64,

        /// JSON file holding an array of savings goals
        #[arg(short, long)]
        goals: Option<PathBuf>,
    },

    /// Recommend an investment strategy
    Invest {
        /// JSON file holding the investor profile
        #[arg(short, long)]
        profile: PathBuf,

        /// JSON file holding an array of current investments
        #[arg(short, long)]
        investments: Option<PathBuf>,

        /// Risk tolerance: low, moderate or high
        #[arg(short, long, default_value = "moderate")]
        risk: String,
    },

    /// Forecast the financial situation over the coming months
    Forecast {
        /// JSON file holding an array of transactions
        #[arg(short, long)]
        transactions: PathBuf,

        #[arg(long)]
        income: f64,

        #[arg(long)]
        expenses: f64,

        #[arg(long)]
        savings: f64,

        /// JSON file holding an array of investments
        #[arg(short, long)]
        investments: Option<PathBuf>,
    },
}
