//! Headless admin entry point.
//!
//! A small command surface over the same client the UI uses, for
//! smoke-checking a deployment: list or delete polygons, list citizens.

use anyhow::{bail, Context, Result};

use zonekit::init_logging;
use zonekit_client::{
    ApiClient, ApiConfig, CitizenStore, HttpCitizenStore, HttpPolygonStore, PolygonStore,
};
use zonekit_settings::Settings;

fn print_usage() {
    eprintln!("Usage: zonekit <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  polygons list         List polygon records");
    eprintln!("  polygons delete <id>  Delete a polygon record");
    eprintln!("  citizens list         List citizen records");
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let settings = Settings::load().context("failed to load settings")?;
    let mut config = ApiConfig::new(settings.api.base_url.clone());
    config.timeout_ms = settings.api.timeout_ms;
    let client = ApiClient::new(&config).context("failed to build API client")?;

    let args: Vec<String> = std::env::args().collect();
    match (args.get(1).map(String::as_str), args.get(2).map(String::as_str)) {
        (Some("polygons"), Some("list")) => {
            let store = HttpPolygonStore::new(client);
            let records = store.list().await?;
            for record in &records {
                println!(
                    "{:>6}  {}  {}",
                    record.id,
                    record.created_at.format("%Y-%m-%d"),
                    record.name
                );
            }
            println!("{} polygon(s)", records.len());
        }
        (Some("polygons"), Some("delete")) => {
            let id: i64 = args
                .get(3)
                .context("missing polygon id")?
                .parse()
                .context("polygon id must be an integer")?;
            let store = HttpPolygonStore::new(client);
            store.delete(id).await?;
            println!("deleted polygon {id}");
        }
        (Some("citizens"), Some("list")) => {
            let store = HttpCitizenStore::new(client);
            let citizens = store.list().await?;
            for citizen in &citizens {
                println!(
                    "{:>6}  {} {}  fin={}",
                    citizen.id, citizen.name, citizen.surname, citizen.fin
                );
            }
            println!("{} citizen(s)", citizens.len());
        }
        (None, _) => {
            print_usage();
        }
        (Some(command), sub) => {
            print_usage();
            bail!("unknown command: {command} {}", sub.unwrap_or(""));
        }
    }

    Ok(())
}
