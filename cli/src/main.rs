mod logging;
mod print;
mod tui;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use barberbook_core::{
    match_service, normalize_time, parse_date, parse_month, BookingSession, Clock, ConfigRepository,
    FileConfigRepository, FixedClock, ShopConfig, SystemClock,
};
use barberbook_core::repository::data_dir;
use barberbook_core::time::month_of;
use chrono::Datelike;
use clap::Parser;

#[derive(Parser)]
#[command(name = "barberbook")]
#[command(about = "Book a chair: calendar, time slots and confirmation", long_about = None)]
struct Cli {
    /// Directory holding config.json and the log file (default: ~/.barberbook)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the month grid (usage: calendar --month 2024-07)
    Calendar {
        #[arg(long)]
        month: Option<String>,
    },
    /// List time slots for a date
    Slots {
        #[arg(long)]
        date: Option<String>,
    },
    /// List the offered services
    Services,
    /// Show how to reach the shop
    Contacts,
    /// Assemble a booking (usage: book --date 2024-07-10 --time 14:00 --service beard)
    Book {
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        time: Option<String>,
        /// Service name, prefix or number from `services`
        #[arg(long)]
        service: Option<String>,
    },
    /// Open the Terminal User Interface
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = data_dir(cli.data_dir.clone())?;
    if matches!(cli.command, None | Some(Commands::Tui)) {
        logging::init_file(&data_dir)?;
    } else {
        logging::init_stderr();
    }

    let repo = FileConfigRepository::new(Some(data_dir.clone()))?;
    let config = repo.load()?;
    tracing::debug!(path = %repo.path().display(), services = config.services.len(), "config loaded");

    let clock: Box<dyn Clock> = match &cli.today {
        Some(d) => Box::new(FixedClock(parse_date(d)?)),
        None => Box::new(SystemClock),
    };

    match cli.command {
        Some(Commands::Calendar { month }) => {
            let mut session = BookingSession::new(clock, &config);
            if let Some(m) = month {
                let target = parse_month(&m)?;
                session.jump_to(target);
            }
            print::print_calendar(&session);
        }
        Some(Commands::Slots { date }) => {
            let date = date.as_deref().map(parse_date).transpose()?;
            print::print_slots(&config, date);
        }
        Some(Commands::Services) => {
            print::print_services(&config);
        }
        Some(Commands::Contacts) => {
            print::print_contacts(&config);
        }
        Some(Commands::Book { date, time, service }) => {
            book(clock, &config, date, time, service)?;
        }
        Some(Commands::Tui) | None => {
            tui::run(clock, config)?;
        }
    }
    Ok(())
}

/// Replays the visitor's clicks on a fresh session and prints the draft.
fn book(
    clock: Box<dyn Clock>,
    config: &ShopConfig,
    date: Option<String>,
    time: Option<String>,
    service: Option<String>,
) -> Result<()> {
    let mut session = BookingSession::new(clock, config);

    if let Some(query) = service {
        let index = match_service(&query, session.catalog())?;
        session.choose_service(index);
    }

    if let Some(d) = date {
        let date = parse_date(&d)?;
        session.jump_to(month_of(date));
        if session.select_day(date.day()).is_none() {
            return Err(anyhow!("{} cannot be booked: only days after {} are open", date, session.today()));
        }
    }

    if let Some(t) = time {
        let label = normalize_time(&t)?;
        if session.select_time(&label).is_none() {
            return Err(anyhow!("{} is not available", label));
        }
    }

    match session.confirm() {
        Ok(draft) => {
            println!("{}", session.locale().labels().booking_title);
            println!("{}", draft);
        }
        Err(e) => {
            println!("{} ({})", session.locale().labels().choose_date_and_time, e);
        }
    }
    Ok(())
}
