use std::io::BufRead;
use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::Cli;
use crate::error::Result;
use crate::exporter::export;
use crate::fmt::money;
use crate::models::Operation;
use crate::parser::parse_statement;
use crate::reader::read_statement;
use crate::settings::load_settings;

/// First whitespace-delimited token of the next input line.
fn read_period<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.split_whitespace().next().unwrap_or("").to_string())
}

fn prompt_period() -> Result<String> {
    println!("Please enter [MM.YYYY] report period:");
    read_period(&mut std::io::stdin().lock())
}

fn refund_table(refunds: &[Operation]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Row", "Date", "Description", "Amount", "Card"]);
    for op in refunds {
        table.add_row(vec![
            Cell::new(op.row_index + 1),
            Cell::new(&op.date),
            Cell::new(&op.name),
            Cell::new(format!("{} {}", money(op.cost), op.currency.code())),
            Cell::new(format!("*{}", op.last4)),
        ]);
    }
    table
}

fn print_refunds(refunds: &[Operation]) {
    if refunds.is_empty() {
        return;
    }
    println!(
        "{}",
        "Please check these transactions, they may be refunds to the card:".yellow()
    );
    println!("{}", refund_table(refunds).to_string().yellow());
}

pub fn run(cli: Cli) -> Result<()> {
    let mut settings = load_settings()?;
    if let Some(dir) = cli.reports_dir {
        settings.reports_dir = dir;
    }
    if let Some(output) = cli.output {
        settings.output_path = output;
    }

    let raw_period = match cli.period {
        Some(p) => p,
        None => prompt_period()?,
    };
    let report_path = settings.statement_source().locate(&raw_period)?;
    println!("Found report: {}", report_path.display());

    let grid = read_statement(&report_path)?;
    let parsed = parse_statement(&grid)?;
    print_refunds(&parsed.refunds);

    let output_path = PathBuf::from(&settings.output_path);
    export(&output_path, &parsed.operations)?;
    println!(
        "{} expenses collected, {} refunds to check",
        parsed.operations.len(),
        parsed.refunds.len()
    );
    println!("CSV file saved as {}", output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, PaymentType};
    use rust_decimal::Decimal;

    #[test]
    fn test_read_period_first_token() {
        let mut input = "  05.2024 extra\n".as_bytes();
        assert_eq!(read_period(&mut input).unwrap(), "05.2024");
    }

    #[test]
    fn test_read_period_empty_input() {
        let mut input = "".as_bytes();
        assert_eq!(read_period(&mut input).unwrap(), "");
        let mut blank = "\n".as_bytes();
        assert_eq!(read_period(&mut blank).unwrap(), "");
    }

    #[test]
    fn test_refund_table_lists_every_refund() {
        let refund = Operation {
            name: "Store Refund".to_string(),
            date: "09.05.2024".to_string(),
            payment_type: PaymentType::Card,
            category: "Шопинг".to_string(),
            subcategory: String::new(),
            cost: Decimal::new(2500, 2),
            currency: Currency::Byn,
            last4: "1234".to_string(),
            row_index: 6,
        };
        let rendered = refund_table(&[refund.clone(), refund]).to_string();
        assert_eq!(rendered.matches("Store Refund").count(), 2);
        assert!(rendered.contains("25,00 BYN"));
        assert!(rendered.contains("*1234"));
    }
}
