use anyhow::{Context, Result};
use pagebake::Config;
use pagebake::logging::{init_tracing, log_settings};
use pagebake::site::build_site;

fn main() -> Result<()> {
    let config = Config::from_cli();
    init_tracing(config.log_format);
    log_settings(&config);

    let report = build_site(&config)
        .with_context(|| format!("building {}", config.input.display()))?;
    println!(
        "✓ Build complete! Output written to {}",
        report.output_path.display()
    );
    Ok(())
}
