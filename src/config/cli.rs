use crate::domain::model::{BranchId, CategoryId, CompanyId, EmployeeId, ServiceId};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "salon-booking")]
#[command(about = "Browse a salon's services and branches, and book an appointment")]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Reservation API base URL")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Company to show instead of the first one listed")]
    pub company_id: Option<CompanyId>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the companies known to the API
    Companies,
    /// Company introduction with the main branch
    Welcome,
    /// Service catalog, one category at a time
    Services {
        #[arg(long)]
        category: Option<CategoryId>,
    },
    /// Branch locator; `--index` is 1-based and wraps around
    Branches {
        #[arg(long, default_value_t = 1)]
        index: usize,
        /// Print the map `<iframe>` snippet for the branch instead
        #[arg(long)]
        embed: bool,
    },
    /// Company contacts and social links
    Contacts,
    /// Bookable start times at a branch
    Slots {
        #[arg(long)]
        branch: BranchId,
    },
    /// Choices still open for a partial booking
    Options {
        #[arg(long)]
        service: Option<ServiceId>,
        #[arg(long)]
        branch: Option<BranchId>,
        #[arg(long)]
        specialist: Option<EmployeeId>,
    },
    /// Create an appointment
    Book(BookArgs),
}

#[derive(Debug, Clone, Args)]
pub struct BookArgs {
    #[arg(long)]
    pub service: ServiceId,

    #[arg(long)]
    pub branch: BranchId,

    #[arg(long)]
    pub specialist: EmployeeId,

    #[arg(long, help = "YYYY-MM-DD, defaults to today")]
    pub date: Option<NaiveDate>,

    #[arg(long, help = "HH:MM")]
    pub time: String,

    #[arg(long = "name")]
    pub full_name: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub telegram: Option<String>,
}
