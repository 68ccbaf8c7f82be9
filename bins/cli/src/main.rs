//! Moneysafe command-line calculator
//!
//! Usage:
//!   moneysafe sum <amount>...   - Add amounts and print the total
//!   moneysafe cents <amount>    - Print an amount as a whole cent count
//!   moneysafe dollars <cents>   - Print a cent count as dollars
//!
//! Amounts are money text like `$3.18` or `65`; bare numbers take the symbol
//! from `MONEYSAFE_SYMBOL` (default `$`).

use anyhow::{Context, bail};
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moneysafe::{MoneyConfig, MoneyFactory, ToAmount, cents_to_dollars, configure_money};

const USAGE: &str = "usage: moneysafe <sum|cents|dollars> <amount>...";

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moneysafe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = MoneyConfig::load().context("Failed to load configuration")?;
    let factory = configure_money(&config);
    info!(symbol = %factory.symbol(), "Money constructor configured");

    let args: Vec<String> = std::env::args().skip(1).collect();
    println!("{}", run(&factory, &args)?);

    Ok(())
}

/// Executes one command and returns the line to print.
fn run(factory: &MoneyFactory, args: &[String]) -> anyhow::Result<String> {
    let Some((command, operands)) = args.split_first() else {
        bail!(USAGE);
    };

    match command.as_str() {
        "sum" => {
            let mut total = factory.zero();
            for text in operands {
                let amount = factory
                    .parse(text)
                    .with_context(|| format!("Invalid amount: {text}"))?;
                debug!(%amount, "Adding amount");
                total = total.add(amount);
            }
            Ok(total.to_string())
        }
        "cents" => {
            let text = single_operand(operands)?;
            let amount = factory
                .parse(text)
                .with_context(|| format!("Invalid amount: {text}"))?;
            Ok(amount.cents().to_string())
        }
        "dollars" => {
            let text = single_operand(operands)?;
            let cents: Decimal = text
                .to_amount()
                .with_context(|| format!("Invalid cent count: {text}"))?;
            Ok(format!("{:.2}", cents_to_dollars(cents)))
        }
        other => bail!("Unknown command '{other}'\n{USAGE}"),
    }
}

fn single_operand(operands: &[String]) -> anyhow::Result<&str> {
    match operands {
        [text] => Ok(text.as_str()),
        _ => bail!(USAGE),
    }
}
