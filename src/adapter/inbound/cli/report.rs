//! Report printers for each `-option`.

use crate::adapter::inbound::cli::dispatch::ReportOption;
use crate::adapter::inbound::cli::{banner, output};
use crate::application::statistics::EmployeeStatistics;
use crate::domain::error::StatsError;
use crate::error::{Error, Result};
use crate::port::outbound::source::RecordSource;

/// Print mean, median and variance of salaries.
pub fn print_salary_stats<S: RecordSource>(stats: &EmployeeStatistics<S>) -> Result<()> {
    output::section("Salaries");
    output::field("Average salary", output::number(stats.mean_salary()?));
    output::field("Median salary", output::number(stats.median_salary()?));
    output::field("Salary variance", output::number(stats.salary_variance()?));
    Ok(())
}

/// Print mean, median and variance of ages.
pub fn print_age_stats<S: RecordSource>(stats: &EmployeeStatistics<S>) -> Result<()> {
    output::section("Ages");
    output::field("Average employee age", output::number(stats.mean_age()?));
    output::field("Median employee age", output::number(stats.median_age()?));
    output::field("Age variance", output::number(stats.age_variance()?));
    Ok(())
}

/// Print the most common first and last names.
pub fn print_modes<S: RecordSource>(stats: &EmployeeStatistics<S>) -> Result<()> {
    output::section("Names");
    print_mode("Most popular first name", "first name", stats.first_name_mode())?;
    print_mode("Most popular last name", "last name", stats.last_name_mode())
}

fn print_mode(label: &str, what: &str, mode: Result<String>) -> Result<()> {
    match mode {
        Ok(name) => output::field(label, name),
        Err(Error::Stats(StatsError::NoUniqueMode)) => {
            output::message(&no_unique_mode(what));
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Message shown when no single value is the most common.
#[must_use]
pub fn no_unique_mode(what: &str) -> String {
    format!("No unique {what} mode, none are more popular than the others")
}

/// Banner followed by the salary, age and name reports.
pub fn print_summary<S: RecordSource>(stats: &EmployeeStatistics<S>) -> Result<()> {
    banner::print_banner();
    print_salary_stats(stats)?;
    print_age_stats(stats)?;
    print_modes(stats)
}

/// List the recognised options.
pub fn print_help() {
    output::section("Options");
    for option in ReportOption::ALL {
        output::field(option.token(), option.description());
    }
    output::note("With no options, -summary is shown.");
}
