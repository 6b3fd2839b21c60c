use barberbook_core::{
    AvailabilityResolver, BookingSession, CellOrigin, Clock, DayCell, ShopConfig, Temporal,
};
use chrono::NaiveDate;
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use unicode_width::UnicodeWidthStr;

#[derive(Tabled)]
struct SlotRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct ServiceRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Service")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
}

/// `·` marks neighbouring months, `~` past days, `[n]` today.
fn cell_text(cell: &DayCell) -> String {
    match cell.origin {
        CellOrigin::Previous | CellOrigin::Next => format!("·{}", cell.day),
        CellOrigin::Current(Temporal::Past) => format!("~{}", cell.day),
        CellOrigin::Current(Temporal::Today) => format!("[{}]", cell.day),
        CellOrigin::Current(Temporal::Future) => cell.day.to_string(),
    }
}

fn centered(title: &str, width: usize) -> String {
    let pad = width.saturating_sub(title.width()) / 2;
    format!("{}{}", " ".repeat(pad), title)
}

pub fn print_calendar<C: Clock>(session: &BookingSession<C>) {
    let grid = session.grid();

    let mut builder = Builder::default();
    builder.push_record(session.locale().weekday_headers().iter().map(|d| d.to_string()));
    for row in grid.rows() {
        builder.push_record(row.iter().map(cell_text));
    }

    let mut table = builder.build();
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    let rendered = table.to_string();
    let width = rendered.lines().next().map(|l| l.width()).unwrap_or(0);

    println!("\x1b[1;36m{}\x1b[0m", centered(&session.month_title(), width));
    println!("{}", rendered);
    println!("~ past   [n] today   · other month   plain days are open for booking");
}

pub fn print_slots(config: &ShopConfig, date: Option<NaiveDate>) {
    let labels = config.locale.labels();
    match date {
        Some(d) => println!(
            "{} - {}",
            labels.available_time,
            barberbook_core::format_booking_date(d, config.locale)
        ),
        None => println!("{}", labels.available_time),
    }

    let rows: Vec<SlotRow> = AvailabilityResolver::default()
        .resolve(date)
        .into_iter()
        .map(|slot| SlotRow {
            status: if slot.available { "free".to_string() } else { "taken".to_string() },
            time: slot.label,
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
}

pub fn print_services(config: &ShopConfig) {
    if config.services.is_empty() {
        println!("No services configured.");
        return;
    }

    let rows: Vec<ServiceRow> = config
        .services
        .iter()
        .enumerate()
        .map(|(i, s)| ServiceRow {
            number: i + 1,
            name: s.name.clone(),
            price: s.price.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
}

pub fn print_contacts(config: &ShopConfig) {
    let c = &config.contacts;
    println!("\x1b[1;36m{}\x1b[0m", config.shop_name);
    println!("  Phone:     {}  ({})", c.phone, c.phone_link());
    println!("  Instagram: @{}  ({})", c.instagram.trim_start_matches('@'), c.instagram_link());
    println!("  Address:   {}  ({})", c.address, c.map_link());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_markers() {
        assert_eq!(cell_text(&DayCell { day: 30, origin: CellOrigin::Previous }), "·30");
        assert_eq!(cell_text(&DayCell { day: 9, origin: CellOrigin::Current(Temporal::Today) }), "[9]");
        assert_eq!(cell_text(&DayCell { day: 8, origin: CellOrigin::Current(Temporal::Past) }), "~8");
        assert_eq!(cell_text(&DayCell { day: 10, origin: CellOrigin::Current(Temporal::Future) }), "10");
    }

    #[test]
    fn test_centered() {
        assert_eq!(centered("Июль 2024", 13), "  Июль 2024");
        assert_eq!(centered("too long for it", 4), "too long for it");
    }
}
