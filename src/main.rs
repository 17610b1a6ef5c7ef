use anyhow::{Context, Result};
use clap::Parser;
use srf::{convert_dir, ConvertConfig};

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    let config = match cli.config {
        Some(ref path) => ConvertConfig::from_file(path)
            .with_context(|| format!("cannot load config {}", path.display()))?,
        None => ConvertConfig::default(),
    };
    let config = cli.apply(config);
    log::debug!("{:?}", config);

    let report = convert_dir(&config).with_context(|| {
        format!(
            "conversion of {} into {} failed",
            config.input_dir.display(),
            config.output_dir.display()
        )
    })?;

    println!(
        "converted {}, skipped {}; surfaces in {}",
        report.converted.len(),
        report.skipped.len(),
        config.output_dir.display()
    );
    Ok(())
}
