use sheets_sync::{SheetClient, SheetRef};
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::from_filename("./discipline-api/.env.local").ok();

    let spreadsheet_id = env::var("SHEET_SPREADSHEET_ID")?;
    let gid = env::var("SHEET_GID").unwrap_or_else(|_| "0".to_string());

    let client = SheetClient::new(SheetRef::new(spreadsheet_id, gid));
    let snapshot = client.fetch_snapshot().await?;

    for violator in &snapshot.violators {
        println!(
            "{}: {} ({}, {})",
            violator.id, violator.full_name, violator.position, violator.department
        );
    }

    for violation in &snapshot.violations {
        println!(
            "  {} {} {}: {} [{}]",
            violation.date,
            violation.violator_name,
            violation.violation_type,
            violation.description,
            violation.penalty
        );
    }

    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
