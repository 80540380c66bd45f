use anyhow::Result;
use colored::Colorize;

use oi_sentiment::config::SentimentConfig;
use oi_sentiment::logging;
use oi_sentiment::processor::run_sentiment_analysis;

fn main() -> Result<()> {
    logging::init_logging();

    println!("{}", "=".repeat(60).blue());
    println!("{}", "OI Sentiment Analyzer".green().bold());
    println!("{}", "=".repeat(60).blue());
    println!();

    let mut config = SentimentConfig::default();
    if let Some(dir) = std::env::args().nth(1) {
        config.data_dir = dir.into();
    }
    config.validate()?;

    println!("{}", "Step 1: Configuration".cyan());
    println!(
        "{} window={} threshold={} streak={} dex_factor={}",
        "ℹ".blue(),
        config.rolling_window,
        config.deviation_threshold,
        config.confirmation_streak,
        config.dex_factor
    );
    println!("{} data dir: {}", "ℹ".blue(), config.data_dir.display());
    println!();

    println!("{}", "Step 2: Processing symbols...".cyan());
    let date = chrono::Local::now().date_naive();
    let start_time = std::time::Instant::now();
    let runs = run_sentiment_analysis(&config, date)?;
    let elapsed = start_time.elapsed();
    println!();

    println!("{}", "=".repeat(60).blue());
    println!("{}", "Summary".cyan().bold());
    println!("{}", "=".repeat(60).blue());
    for run in &runs {
        let latest = run
            .rows
            .last()
            .map(|row| row.sentiment.to_string())
            .unwrap_or_default();
        println!(
            "  {} {} → {} rows, latest: {}",
            "✓".green(),
            run.symbol.label().yellow(),
            run.rows.len(),
            latest
        );
    }
    for &symbol in &config.symbols {
        if !runs.iter().any(|run| run.symbol == symbol) {
            println!(
                "  {} {} → no data for {}",
                "⚠".yellow(),
                symbol.label().yellow(),
                date.format("%Y-%m-%d")
            );
        }
    }
    println!("{} Time taken: {:.2}s", "⏱".yellow(), elapsed.as_secs_f64());

    println!();
    println!("{}", "=".repeat(60).blue());
    println!("{}", "Done!".green().bold());
    println!("{}", "=".repeat(60).blue());

    Ok(())
}
