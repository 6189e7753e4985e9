use clap::Parser;
use env_logger::Env;
use log::info;
use std::io::IsTerminal;
use std::process;

use strip_colorscan::cli::{AnalyzeArgs, Cli, Commands, GenerateConfigArgs};
use strip_colorscan::presenter::{render_json, render_text, save_report, Labels};
use strip_colorscan::{
    AnalysisError, AnalyzerConfig, CameraFrame, Gauge, ImageSource, Result, SourceKind,
    StripAnalyzer, UploadedFile,
};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Analyze(args) => run_analyze(&args),
        Commands::GenerateConfig(args) => run_generate_config(&args),
    };

    if let Err(error) = outcome {
        eprintln!("Analysis failed: {}", error);
        eprintln!("Suggestion: {}", error.user_message());
        process::exit(1);
    }
}

fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let labels = Labels::for_locale(config.locale);

    let source: Box<dyn ImageSource> = match (config.source, &args.image) {
        (SourceKind::Upload, Some(path)) => Box::new(UploadedFile::new(path)),
        (SourceKind::Upload, None) => {
            eprintln!("{}", labels.no_image);
            return Ok(());
        }
        (SourceKind::Camera, Some(path)) => {
            let bytes = std::fs::read(path).map_err(|e| {
                AnalysisError::image_load(format!("Failed to read frame {}", path.display()), e)
            })?;
            Box::new(CameraFrame::from_bytes(bytes))
        }
        (SourceKind::Camera, None) => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                eprintln!("{}", labels.no_image);
                return Ok(());
            }
            let frame = CameraFrame::from_reader(stdin.lock())?;
            if frame.is_empty() {
                eprintln!("{}", labels.no_image);
                return Ok(());
            }
            Box::new(frame)
        }
    };

    info!("Reading {} for {}", source.describe(), config.analyte);
    let sample = source.acquire()?;
    let analyzer = StripAnalyzer::with_locale(config.analyte, config.locale);
    let result = analyzer.classify(&sample)?;

    if config.output.json {
        println!("{}", render_json(&result)?);
    } else {
        print!("{}", render_text(&result));
    }

    if let Some(path) = &config.output.gauge_path {
        Gauge::for_result(&result).save_png(config.output.gauge_width, path)?;
        info!("Saved gauge to {}", path.display());
    }

    if let Some(path) = &config.output.report_path {
        save_report(&sample, &Gauge::for_result(&result), config.output.gauge_width, path)?;
        info!("Saved report to {}", path.display());
    }

    Ok(())
}

fn run_generate_config(args: &GenerateConfigArgs) -> Result<()> {
    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            AnalysisError::config(format!("Failed to create {}", parent.display()), e)
        })?;
    }

    let config = AnalyzerConfig::default();
    config.to_json_file(&args.output)?;

    eprintln!("Configuration saved to {}", args.output.display());
    eprintln!("  Analyte: {}", config.analyte);
    eprintln!("  Source:  {}", config.source);
    eprintln!("  Locale:  {}", config.locale);
    eprintln!("  Gauge:   {} px", config.output.gauge_width);
    Ok(())
}
