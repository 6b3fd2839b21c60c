use anyhow::{anyhow, Result};

use crate::model::service::Service;

/// Finds a catalog entry by 1-based number, exact name or unique
/// case-insensitive prefix.
pub fn match_service(query: &str, catalog: &[Service]) -> Result<usize> {
    let query = query.trim();

    if let Ok(n) = query.parse::<usize>() {
        if n == 0 || n > catalog.len() {
            return Err(anyhow!("No service number {} (1-{})", n, catalog.len()));
        }
        return Ok(n - 1);
    }

    let lowered = query.to_lowercase();

    // 1. Exact match
    if let Some(i) = catalog.iter().position(|s| s.name.to_lowercase() == lowered) {
        return Ok(i);
    }

    // 2. Prefix match
    let matches: Vec<usize> = catalog
        .iter()
        .enumerate()
        .filter(|(_, s)| s.name.to_lowercase().starts_with(&lowered))
        .map(|(i, _)| i)
        .collect();

    match matches.len() {
        1 => Ok(matches[0]),
        0 => Err(anyhow!("Unknown service: '{}'", query)),
        _ => {
            let names: Vec<&str> = matches.iter().map(|&i| catalog[i].name.as_str()).collect();
            Err(anyhow!("Ambiguous service: '{}' matches {:?}", query, names))
        }
    }
}

/// Accepts `14`, `14:00` or `9:00` and returns the `HH:MM` slot label.
pub fn normalize_time(input: &str) -> Result<String> {
    let input = input.trim();
    let (hour_str, minute_str) = input.split_once(':').unwrap_or((input, "00"));

    let hour: u32 = hour_str
        .parse()
        .map_err(|_| anyhow!("Invalid hour in '{}'", input))?;
    let minute: u32 = minute_str
        .parse()
        .map_err(|_| anyhow!("Invalid minutes in '{}'", input))?;

    if hour > 23 || minute > 59 {
        return Err(anyhow!("Time out of range: '{}'", input));
    }
    Ok(format!("{:02}:{:02}", hour, minute))
}
