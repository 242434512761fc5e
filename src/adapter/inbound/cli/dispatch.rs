//! Maps report tokens to printers.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::adapter::inbound::cli::{output, report, treemap};
use crate::application::statistics::EmployeeStatistics;
use crate::error::Result;
use crate::port::outbound::source::RecordSource;

/// One report selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOption {
    Salary,
    Age,
    Summary,
    Modes,
    Treemap,
    Help,
}

impl ReportOption {
    /// Every option, in the order `-help` lists them.
    pub const ALL: [Self; 6] = [
        Self::Salary,
        Self::Age,
        Self::Summary,
        Self::Modes,
        Self::Treemap,
        Self::Help,
    ];

    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Salary => "-salary",
            Self::Age => "-age",
            Self::Summary => "-summary",
            Self::Modes => "-modes",
            Self::Treemap => "-treemap",
            Self::Help => "-help",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Salary => "average, median and variance of salaries",
            Self::Age => "average, median and variance of ages",
            Self::Summary => "banner followed by salary, age and name reports",
            Self::Modes => "most popular first and last names",
            Self::Treemap => "salaries drawn as a treemap, labeled by age",
            Self::Help => "this list",
        }
    }

    /// Whether printing this report needs the employee records.
    #[must_use]
    pub const fn needs_records(self) -> bool {
        !matches!(self, Self::Help)
    }
}

impl fmt::Display for ReportOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ReportOption {
    type Err = String;

    fn from_str(token: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.token() == token)
            .ok_or_else(|| token.to_string())
    }
}

/// Parse command-line tokens in order.
///
/// No tokens means `-summary`. Unknown tokens are kept as `Err(token)` so
/// they can be reported in place.
#[must_use]
pub fn parse_tokens(tokens: &[String]) -> Vec<std::result::Result<ReportOption, String>> {
    if tokens.is_empty() {
        return vec![Ok(ReportOption::Summary)];
    }
    tokens.iter().map(|t| t.parse()).collect()
}

/// Run every report named by `tokens`, in order.
///
/// Unknown tokens are reported and skipped. The first report that needs
/// records triggers the fetch; later ones reuse it.
///
/// # Errors
///
/// Returns the first fetch, parse or statistics error; reports already
/// printed stay printed.
pub fn dispatch<S: RecordSource>(stats: &EmployeeStatistics<S>, tokens: &[String]) -> Result<()> {
    for parsed in parse_tokens(tokens) {
        let option = match parsed {
            Ok(option) => option,
            Err(token) => {
                warn!(token = %token, "Unknown option");
                output::unknown_option(&token);
                continue;
            }
        };

        debug!(option = %option, "Dispatching report");
        if option.needs_records() && !stats.is_loaded() {
            load(stats)?;
        }

        match option {
            ReportOption::Salary => report::print_salary_stats(stats)?,
            ReportOption::Age => report::print_age_stats(stats)?,
            ReportOption::Summary => report::print_summary(stats)?,
            ReportOption::Modes => report::print_modes(stats)?,
            ReportOption::Treemap => treemap::print_treemap(stats)?,
            ReportOption::Help => report::print_help(),
        }
    }
    Ok(())
}

fn load<S: RecordSource>(stats: &EmployeeStatistics<S>) -> Result<()> {
    let pb = output::spinner("Fetching employees...");
    let result = stats.raw_records().map(|_| ());
    output::spinner_done(&pb);
    result
}
