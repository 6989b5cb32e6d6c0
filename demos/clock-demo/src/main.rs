//! Meridian demo application
//!
//! Console stand-in for the graphical shell: four live clock panels
//! refreshed once per second, followed by one cross-zone conversion
//! table.

use std::time::Duration;

use meridian_core::{ConversionRequest, ZoneCatalog};
use meridian_engine::{ClockSource, ConversionEngine};
use meridian_runtime::{RefreshScheduler, SchedulerConfig, SlotRegistry};

const CLOCK_COUNT: usize = 4;
const REFRESH_ROUNDS: usize = 3;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("╔══════════════════════════════════════╗");
    println!("║        Meridian World Clock          ║");
    println!("╚══════════════════════════════════════╝");
    println!();

    let catalog = ZoneCatalog::new();
    let clock = ClockSource::tzdb();
    let slots = SlotRegistry::with_defaults(&catalog, CLOCK_COUNT);

    let mut scheduler = RefreshScheduler::with_config(
        clock.clone(),
        slots.clone(),
        SchedulerConfig {
            tick_interval: Duration::from_secs(1),
            channel_capacity: 64,
        },
    );
    let mut updates = scheduler.start()?;

    for _round in 0..REFRESH_ROUNDS {
        for _ in 0..slots.len() {
            let Some(update) = updates.recv().await else {
                break;
            };
            match update.result {
                Ok(moment) => println!(
                    "[clock {}] {}  {}  {} ({})",
                    update.slot,
                    moment.format_time(),
                    moment.format_date(),
                    moment.zone_id,
                    moment.offset_label(),
                ),
                Err(err) => println!("[clock {}] unavailable: {}", update.slot, err),
            }
        }
        println!();
    }

    scheduler.stop().await;

    // Conversion panel: noon in the first catalog zone, everywhere
    let engine = ConversionEngine::new(catalog.clone(), clock);
    let source = catalog.entries()[0];
    let request = ConversionRequest::new(source.id(), 12, 0);
    let result = engine.convert(&request, chrono::Utc::now())?;

    println!("12:00 in {} is:", source.display_name);
    println!("  {:<24} {:<20} {}", "Location", "Date", "Time");
    for row in &result.rows {
        let marker = if row.is_source { ">" } else { " " };
        match &row.moment {
            Some(moment) => println!(
                "{} {:<24} {:<20} {}",
                marker,
                row.entry.display_name,
                moment.format_date(),
                moment.format_time(),
            ),
            None => println!("{} {:<24} unavailable", marker, row.entry.display_name),
        }
    }

    Ok(())
}
