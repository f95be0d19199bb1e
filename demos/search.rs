use basestation::lookup;
use basestation::prelude::*;
use std::collections::HashMap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("🛩️  BaseStation Demo\n");

    // Open a throwaway in-memory log and create the schema
    let station = BaseStation::open_in_memory().await?;
    station.ensure_schema().await?;
    station.health_check().await?;
    println!("✅ Database ready");

    // Record a few aircraft and their flights
    let aircraft = station.aircraft_store()?;
    let flights = station.flights_store()?;

    let baw = aircraft
        .write([
            ("ModeS", "400ABC"),
            ("Registration", "G-EUPT"),
            ("ICAOTypeCode", "A319"),
            ("OperatorFlagCode", "BAW"),
            ("ModeSCountry", "United Kingdom"),
        ])
        .await?;
    let dlh = aircraft
        .write([
            ("ModeS", "3C4B26"),
            ("Registration", "D-AIPX"),
            ("ICAOTypeCode", "A320"),
            ("OperatorFlagCode", "DLH"),
            ("ModeSCountry", "Germany"),
        ])
        .await?;

    let baw_id = baw.to_string();
    let dlh_id = dlh.to_string();
    flights
        .write([
            ("AircraftID", baw_id.as_str()),
            ("StartTime", "2008-06-20 18:04:11"),
            ("Callsign", "BAW123"),
            ("FirstSquawk", "7312"),
        ])
        .await?;
    flights
        .write([
            ("AircraftID", dlh_id.as_str()),
            ("StartTime", "2008-06-21 09:12:40"),
            ("Callsign", "DLH456"),
            ("FirstSquawk", "1000"),
            ("HadAlert", "1"),
        ])
        .await?;
    println!("✅ Seeded 2 aircraft with flights");

    // Search the log the way the form does: partial criteria, wildcards
    let search = station.aircraft_search()?;

    let mut criteria = HashMap::new();
    criteria.insert("Callsign".to_string(), "BAW%".to_string());
    criteria.insert("Registration".to_string(), String::new()); // blank input

    println!("\n🔍 Callsign LIKE 'BAW%':");
    for row in search.search(&criteria).await? {
        print_row(&row);
    }

    println!("\n🔍 Everything (bounded by the row limit):");
    for row in search.search(&HashMap::new()).await? {
        print_row(&row);
    }

    // Reference links for a hit
    if let Some(url) = lookup::flight_status_url("BAW123") {
        println!("\n🔗 Flight status: {}", url);
    }
    if let Some(url) = lookup::airframe_url("G-EUPT") {
        println!("🔗 Airframe:      {}", url);
    }

    Ok(())
}

fn print_row(row: &Row) {
    let cells: Vec<String> = SEARCH_FIELDS
        .iter()
        .zip(row.iter())
        .map(|(field, value)| format!("{}={}", field, value))
        .collect();
    println!("  {}", cells.join("  "));
}
