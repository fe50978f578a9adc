pub mod collect;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "budget-collector",
    version,
    about = "Collect card expenses from a monthly bank statement into budget sheet rows."
)]
pub struct Cli {
    /// Statement period: MM.YYYY (prompted for when omitted)
    #[arg(long)]
    pub period: Option<String>,
    /// Directory with statement files (default: reports)
    #[arg(long = "reports-dir")]
    pub reports_dir: Option<String>,
    /// Output file (default: output.csv)
    #[arg(long)]
    pub output: Option<String>,
}
