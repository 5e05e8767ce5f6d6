//! CLI entry point for recurring-date-picker
//!
//! Provides a command-line interface for previewing rule summaries and
//! launching the GTK demo window.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use recurring_date_picker::core::summary::parse_weekday;
use recurring_date_picker::core::{describe, format_date, Recurrence, RecurringDate};
use recurring_date_picker::ui::App;

#[derive(Parser)]
#[command(name = "recurring-date-picker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the summary for a recurrence rule
    Describe {
        /// Start date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        start: Option<NaiveDate>,

        /// Recurrence type: none, daily, weekly, monthly or yearly
        #[arg(short, long, default_value = "none")]
        repeat: Recurrence,

        /// Weekly: comma-separated weekday names (e.g. mon,wed,fri)
        #[arg(long, value_delimiter = ',')]
        days: Vec<String>,

        /// Monthly: fixed day of month (1-31)
        #[arg(long)]
        monthly_day: Option<u32>,

        /// Monthly: ordinal week of month (1-5)
        #[arg(long)]
        monthly_week: Option<u32>,

        /// Monthly: weekday name within the ordinal week
        #[arg(long)]
        monthly_weekday: Option<String>,

        /// Yearly: month number (1-12)
        #[arg(long)]
        month: Option<u32>,

        /// Yearly: day of month (1-31)
        #[arg(long)]
        day: Option<u32>,

        /// End date (YYYY-MM-DD); omit for a never-ending rule
        #[arg(long)]
        until: Option<NaiveDate>,
    },

    /// Launch the GTK demo window
    Gui,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Describe {
            start,
            repeat,
            days,
            monthly_day,
            monthly_week,
            monthly_weekday,
            month,
            day,
            until,
        } => describe_rule(DescribeArgs {
            start,
            repeat,
            days,
            monthly_day,
            monthly_week,
            monthly_weekday,
            month,
            day,
            until,
        })?,
        Commands::Gui => App::new(None).run(),
    }

    Ok(())
}

struct DescribeArgs {
    start: Option<NaiveDate>,
    repeat: Recurrence,
    days: Vec<String>,
    monthly_day: Option<u32>,
    monthly_week: Option<u32>,
    monthly_weekday: Option<String>,
    month: Option<u32>,
    day: Option<u32>,
    until: Option<NaiveDate>,
}

/// Builds a selection from the flags and prints its summary
fn describe_rule(args: DescribeArgs) -> anyhow::Result<()> {
    let mut selection = RecurringDate::default();

    if let Some(start) = args.start {
        selection.start_date = Some(start);
    }
    selection.recurrence = args.repeat;

    // Weekly day names
    let mut weekly_days = Vec::with_capacity(args.days.len());
    for name in &args.days {
        weekly_days.push(parse_weekday(name)?);
    }
    weekly_days.sort_unstable();
    selection.weekly_days = weekly_days;

    // Monthly mode: ordinal flags select week-of-month mode, a bare
    // --monthly-day selects day-of-month mode.
    if args.monthly_week.is_some() || args.monthly_weekday.is_some() {
        selection.monthly_week = Some(args.monthly_week.unwrap_or(1));
        selection.monthly_week_day = Some(match &args.monthly_weekday {
            Some(name) => parse_weekday(name)?,
            None => 0,
        });
    } else if let Some(monthly_day) = args.monthly_day {
        selection.monthly_day = monthly_day;
        selection.monthly_week = None;
    }

    // Yearly pattern: months are 1-based on the command line.
    if let Some(month) = args.month {
        selection.yearly_month = month.saturating_sub(1);
    }
    if let Some(day) = args.day {
        selection.yearly_day = day;
    }

    if let Some(until) = args.until {
        selection.never_ends = false;
        selection.end_date = Some(until);
    }

    println!("{} {}", "✓".green(), describe(&selection).bold());

    if selection.recurrence != Recurrence::None {
        match selection.end_date {
            Some(end) => println!("  {} {}", "ends".dimmed(), format_date(end)),
            None => println!("  {}", "never ends".dimmed()),
        }
    }

    Ok(())
}
