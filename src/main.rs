use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tafqeet::utils::{input, logger, validation::Validate};
use tafqeet::{CliConfig, ConversionRecord, Converter, TomlConfig};

fn main() {
    let cli = CliConfig::parse();

    let mut config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    // 初始化日誌
    logger::init_cli_logger(
        cli.verbose,
        Some(config.logging.level.as_str()),
        config.logging.format,
    );

    tracing::info!("🚀 Starting tafqeet CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    cli.apply_overrides(&mut config);

    // 驗證配置
    if let Err(e) = cli.validate().and_then(|_| config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    match run(&cli, &config) {
        Ok(true) => {}
        Ok(false) => {
            if cli.strict {
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("❌ tafqeet failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}

/// 回傳是否所有金額都轉換成功
fn run(cli: &CliConfig, config: &TomlConfig) -> anyhow::Result<bool> {
    if let Some(input) = &cli.input {
        return run_batch(cli, config, input);
    }

    let converter = config.converter();
    tracing::debug!(
        "Converter ready (max scale: {}, max amount: {})",
        converter.max_scale(),
        converter.max_amount()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut all_ok = true;

    if cli.amounts.is_empty() {
        for line in input::amount_lines(io::stdin().lock()) {
            let line = line.context("failed to read amount from stdin")?;
            all_ok &= emit(&converter, &line, cli.json, &mut out)?;
        }
    } else {
        for amount in &cli.amounts {
            all_ok &= emit(&converter, amount, cli.json, &mut out)?;
        }
    }

    out.flush()?;
    Ok(all_ok)
}

fn emit<W: Write>(
    converter: &Converter,
    input: &str,
    json: bool,
    out: &mut W,
) -> anyhow::Result<bool> {
    let record: ConversionRecord = converter.record(input);

    if json {
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", record.text)?;
    }

    Ok(record.is_ok())
}

fn run_batch(cli: &CliConfig, config: &TomlConfig, input: &str) -> anyhow::Result<bool> {
    tracing::info!("📁 Converting CSV: {}", input);

    let batch = config.batch_converter()?;
    let reader = File::open(input).with_context(|| format!("failed to open '{}'", input))?;

    let summary = match &cli.output {
        Some(path) => {
            let writer = File::create(path).with_context(|| format!("failed to create '{}'", path))?;
            let summary = batch.run(reader, BufWriter::new(writer))?;
            tracing::info!("📁 Output saved to: {}", path);
            println!("{}", summary.total_text);
            summary
        }
        None => {
            // stdout 已被 CSV 佔用，總計改寫到 stderr
            let summary = batch.run(reader, io::stdout().lock())?;
            eprintln!("{}", summary.total_text);
            summary
        }
    };

    Ok(summary.failed == 0)
}
