// Neighborhood Match - CLI client for the neighborhood API
//
// Usage:
//   neighborhood-match [--api-url <url>] [--json] list
//   neighborhood-match [--api-url <url>] [--json] show <id>
//   neighborhood-match [--api-url <url>] [--json] search
//       [--min-walkability N] [--min-safety N] [--max-cost N] ...
//   neighborhood-match [--api-url <url>] health

use anyhow::{anyhow, bail, Context, Result};
use neighborhood_match::{NeighborhoodClient, NeighborhoodRecord, ScoreBand, SearchPreferences};
use std::env;

#[derive(Debug, Clone, PartialEq)]
enum Command {
    List,
    Show { id: String },
    Search { preferences: SearchPreferences },
    Health,
}

#[derive(Debug, Clone, PartialEq)]
struct Args {
    api_url: Option<String>,
    json_output: bool,
    command: Command,
}

fn parse_threshold(flag: &str, value: Option<String>) -> Result<f64> {
    let raw = value.ok_or_else(|| anyhow!("{} requires a value", flag))?;
    let n: u8 = raw
        .parse()
        .with_context(|| format!("{} expects a score between 0 and 100, got {:?}", flag, raw))?;
    if n > 100 {
        bail!("{} expects a score between 0 and 100, got {}", flag, n);
    }
    Ok(f64::from(n))
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut iter = args.into_iter().skip(1);
    let mut api_url = None;
    let mut json_output = false;
    let mut command = None;
    let mut preferences = SearchPreferences::default();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--api-url" => {
                api_url = Some(iter.next().ok_or_else(|| anyhow!("--api-url requires a value"))?);
            }
            "--json" => json_output = true,
            "--min-walkability" => {
                preferences.min_walkability = Some(parse_threshold(&arg, iter.next())?);
            }
            "--min-safety" => preferences.min_safety = Some(parse_threshold(&arg, iter.next())?),
            "--max-cost" => preferences.max_cost = Some(parse_threshold(&arg, iter.next())?),
            "--min-nightlife" => {
                preferences.min_nightlife = Some(parse_threshold(&arg, iter.next())?);
            }
            "--min-family" => preferences.min_family = Some(parse_threshold(&arg, iter.next())?),
            "--min-transit" => preferences.min_transit = Some(parse_threshold(&arg, iter.next())?),
            "--min-green" => preferences.min_green = Some(parse_threshold(&arg, iter.next())?),
            "--min-diversity" => {
                preferences.min_diversity = Some(parse_threshold(&arg, iter.next())?);
            }
            "list" if command.is_none() => command = Some(Command::List),
            "health" if command.is_none() => command = Some(Command::Health),
            "search" if command.is_none() => {
                command = Some(Command::Search {
                    preferences: SearchPreferences::default(),
                })
            }
            "show" if command.is_none() => {
                let id = iter.next().ok_or_else(|| anyhow!("show requires a neighborhood id"))?;
                command = Some(Command::Show { id });
            }
            other => bail!("Unexpected argument: {}", other),
        }
    }

    let command = match command {
        Some(Command::Search { .. }) => Command::Search { preferences },
        Some(other) => {
            if preferences != SearchPreferences::default() {
                bail!("Score filters only apply to the search command");
            }
            other
        }
        None => bail!("Missing command (list, show <id>, search, health)"),
    };

    Ok(Args {
        api_url,
        json_output,
        command,
    })
}

fn band_marker(score: u8) -> &'static str {
    match ScoreBand::of(score) {
        ScoreBand::Strong => "+",
        ScoreBand::Moderate => "~",
        ScoreBand::Weak => "-",
    }
}

fn score_cell(label: &str, score: u8) -> String {
    format!("{} {:>3}{}", label, score, band_marker(score))
}

fn print_summary(record: &NeighborhoodRecord) {
    println!(
        "[{:>3}% match] {:<14} {:<22} {} {} {}",
        record.match_score,
        record.name,
        record.location(),
        score_cell("walk", record.walkability_score),
        score_cell("safety", record.safety_score),
        score_cell("cost", record.cost_score),
    );
}

fn print_detail(record: &NeighborhoodRecord) {
    println!("{} ({})  id={}", record.name, record.location(), record.id);
    println!("{}", record.description);
    println!();
    for (field, score) in record.scores() {
        println!("  {:<18} {:>3}  {}", field, score, ScoreBand::of(score).as_str());
    }
    println!();
    println!(
        "  Median age {}, median income {}, population {}",
        record.demographics.median_age,
        record.demographics.median_income,
        record.demographics.population
    );
    println!("  Highlights: {}", record.highlights.join(", "));
    println!("  Amenities:  {}", record.amenities.join(", "));
    println!("  Pros:       {}", record.pros.join(", "));
    println!("  Cons:       {}", record.cons.join(", "));
}

fn print_list(records: &[NeighborhoodRecord], json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No neighborhoods match these preferences.");
        return Ok(());
    }
    for record in records {
        print_summary(record);
    }
    println!("\n{} neighborhood(s)", records.len());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = parse_args(env::args())?;

    let client = match &args.api_url {
        Some(url) => NeighborhoodClient::new(url.clone()),
        None => NeighborhoodClient::from_env(),
    };

    match &args.command {
        Command::List => {
            let records = client
                .get_neighborhoods()
                .await
                .context("Failed to fetch neighborhoods")?;
            print_list(&records, args.json_output)?;
        }
        Command::Show { id } => {
            let record = client
                .get_neighborhood(id)
                .await
                .with_context(|| format!("Failed to fetch neighborhood {}", id))?;
            if args.json_output {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_detail(&record);
            }
        }
        Command::Search { preferences } => {
            let records = client
                .search_neighborhoods(preferences)
                .await
                .context("Failed to search neighborhoods")?;
            print_list(&records, args.json_output)?;
        }
        Command::Health => {
            let health = client.health_check().await.context("Health check failed")?;
            println!("{} ({})", health.message, health.timestamp);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(
            std::iter::once("neighborhood-match")
                .chain(list.iter().copied())
                .map(String::from),
        )
    }

    #[test]
    fn test_parse_list() {
        let parsed = args(&["list"]).unwrap();
        assert_eq!(parsed.command, Command::List);
        assert_eq!(parsed.api_url, None);
        assert!(!parsed.json_output);
    }

    #[test]
    fn test_parse_show() {
        let parsed = args(&["--api-url", "http://api:5000", "show", "3"]).unwrap();
        assert_eq!(parsed.command, Command::Show { id: "3".to_string() });
        assert_eq!(parsed.api_url.as_deref(), Some("http://api:5000"));
    }

    #[test]
    fn test_parse_search_flags_in_any_position() {
        let parsed = args(&[
            "--min-walkability",
            "90",
            "search",
            "--max-cost",
            "50",
            "--json",
        ])
        .unwrap();
        assert!(parsed.json_output);
        assert_eq!(
            parsed.command,
            Command::Search {
                preferences: SearchPreferences {
                    min_walkability: Some(90.0),
                    max_cost: Some(50.0),
                    ..Default::default()
                }
            }
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(args(&[]).is_err());
        assert!(args(&["show"]).is_err());
        assert!(args(&["search", "--min-safety", "high"]).is_err());
        assert!(args(&["search", "--min-safety", "140"]).is_err());
        assert!(args(&["list", "--max-cost", "50"]).is_err());
        assert!(args(&["list", "health"]).is_err());
    }

    #[test]
    fn test_band_markers() {
        assert_eq!(band_marker(92), "+");
        assert_eq!(band_marker(65), "~");
        assert_eq!(band_marker(45), "-");
    }
}
