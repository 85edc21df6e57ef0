//! Command line and shell command definitions.

use std::path::PathBuf;

use backend::export::ExportFormat;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use common::{
    flat_record::FlatRecordField,
    row_filter::RowFilter,
    search_const::MAX_LIMIT,
    search_criteria::{CriteriaError, DateRange, SearchCriteria, SearchField},
    search_request::SearchRequest,
};

#[derive(Debug, Parser)]
#[command(name = "maude", version, about = "Search FDA MAUDE medical device adverse-event reports")]
pub struct Cli {
    /// Log requests and timings to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search reports by a device field
    Search {
        #[command(flatten)]
        search: SearchArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Pull the 100 most recent malfunction or injury reports
    Top {
        kind: TopKind,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Load a saved openFDA response file instead of querying
    Load {
        path: PathBuf,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Interactive session: fetch once, then view, chart and export
    Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TopKind {
    Malfunctions,
    Injuries,
}

impl From<TopKind> for SearchRequest {
    fn from(kind: TopKind) -> Self {
        match kind {
            TopKind::Malfunctions => SearchRequest::TopMalfunctions,
            TopKind::Injuries => SearchRequest::TopInjuries,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Device field to search: generic-name, product-code or udi-di
    #[arg(long, default_value = "generic-name")]
    pub field: SearchField,

    /// Search term
    #[arg(long, required_unless_present = "top")]
    pub term: Option<String>,

    /// First received date (YYYY-MM-DD), inclusive
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// Last received date (YYYY-MM-DD), inclusive
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Number of reports to fetch (1-100)
    #[arg(long, default_value_t = MAX_LIMIT)]
    pub limit: u32,

    /// Run a shortcut instead; field, term and dates are then ignored
    #[arg(long)]
    pub top: Option<TopKind>,
}

impl SearchArgs {
    /// A selected shortcut always wins over the general inputs.
    pub fn to_request(&self) -> Result<SearchRequest, CriteriaError> {
        if let Some(top) = self.top {
            return Ok(top.into());
        }
        let date_range = match (self.from, self.to) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)?),
            _ => None,
        };
        let term = self.term.clone().unwrap_or_default();
        let criteria = SearchCriteria::new(self.field, term, date_range, self.limit)?;
        Ok(SearchRequest::General(criteria))
    }
}

#[derive(Debug, Clone, Args)]
pub struct ViewArgs {
    /// Show a Pareto chart of this column instead of the table
    #[arg(long)]
    pub chart_by: Option<FlatRecordField>,

    /// Only count reports of this event type in the chart
    #[arg(long, requires = "chart_by")]
    pub event_type: Option<String>,

    /// Only show rows matching column=value or column~value (repeatable)
    #[arg(long = "filter")]
    pub filters: Vec<RowFilter>,

    /// Show regulatory numbers and their premarket notification links
    #[arg(long)]
    pub links: bool,

    /// Also write the results to a file
    #[arg(long)]
    pub export: Option<ExportFormat>,

    /// Export path, instead of the fixed filename in MAUDE_EXPORT_DIR
    #[arg(long, requires = "export")]
    pub output: Option<PathBuf>,

    /// Maximum number of table rows to print
    #[arg(long, default_value_t = 50)]
    pub rows: usize,
}

/// One line typed into the interactive shell.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// Search reports by a device field and keep the results
    Search(SearchArgs),
    /// Pull the 100 most recent malfunction or injury reports
    Top { kind: TopKind },
    /// Load a saved openFDA response file
    Load { path: PathBuf },
    /// Print the stored results as a table
    Table {
        /// column=value or column~value (repeatable)
        #[arg(long = "filter")]
        filters: Vec<RowFilter>,
        #[arg(long, default_value_t = 50)]
        rows: usize,
    },
    /// List regulatory numbers with premarket notification links
    Links,
    /// Pareto chart of one column
    Chart {
        #[arg(long)]
        by: FlatRecordField,
        /// Only count reports of this event type
        #[arg(long)]
        event_type: Option<String>,
        /// column=value or column~value (repeatable)
        #[arg(long = "filter")]
        filters: Vec<RowFilter>,
    },
    /// Write the stored results to csv or xlsx
    Export {
        format: ExportFormat,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show what is currently stored
    Status,
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}
