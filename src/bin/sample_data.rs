use anyhow::Result;
use chrono::Local;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use vanlav_order::sample;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    // Parse CLI args or use defaults
    let args: Vec<String> = std::env::args().collect();

    let out_dir = args.get(1).map(String::as_str).unwrap_or(".");

    let days: i64 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(30);

    std::fs::create_dir_all(out_dir)?;

    let mut rng = rand::thread_rng();
    let (sales, writeoffs) = sample::generate(&mut rng, Local::now().naive_local(), days);

    let dir = Path::new(out_dir);
    sample::write_xlsx(&dir.join("sample_sales.xlsx"), &sales)?;
    sample::write_xlsx(&dir.join("sample_writeoffs.xlsx"), &writeoffs)?;
    sample::write_csv(&dir.join("sample_sales.csv"), &sales)?;
    sample::write_csv(&dir.join("sample_writeoffs.csv"), &writeoffs)?;

    info!("Sales: {} records -> {}/sample_sales.{{xlsx,csv}}", sales.len(), dir.display());
    info!(
        "Write-offs: {} records -> {}/sample_writeoffs.{{xlsx,csv}}",
        writeoffs.len(),
        dir.display()
    );

    println!();
    println!("First sales rows:");
    for r in sales.iter().take(5) {
        println!(
            "  {}  {:<12} {:>5}",
            r.date.format("%Y-%m-%d"),
            r.product,
            r.quantity
        );
    }

    Ok(())
}
