//! resume-matcher: score resumes against job descriptions

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::config::Config;
use resume_matcher::error::{Result, ResumeMatcherError};
use resume_matcher::input::InputManager;
use resume_matcher::llm::{GroqClient, ResumeGenerator};
use resume_matcher::output::document::PdfDocumentWriter;
use resume_matcher::output::{save_report_to_file, AnalysisReport, FactsReport, ReportGenerator};
use resume_matcher::processing::analyzer::AnalysisEngine;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            output,
            save,
            detailed,
        } => {
            validate_input(&resume)?;
            validate_input(&job)?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeMatcherError::InvalidInput)?,
                None => config.output.format,
            };

            println!("📄 Resume: {}", resume.display());
            println!("💼 Job Description: {}", job.display());

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;
            info!(
                "Extracted {} resume chars and {} job chars",
                resume_text.len(),
                job_text.len()
            );

            let engine = AnalysisEngine::new(&config)?;
            let analysis = engine.analyze(&resume_text, &job_text)?;
            let report = AnalysisReport::from_analysis(
                analysis,
                &resume.to_string_lossy(),
                &job.to_string_lossy(),
            );

            // Saved files never carry color codes
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(
                use_colors,
                detailed || config.output.detailed,
                true,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("💾 Report saved to {}", path.display());
                    println!("🎯 Match score: {:.1}/10", report.summary.score);
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Facts { job, json } => {
            validate_input(&job)?;

            let mut input_manager = InputManager::new();
            let job_text = input_manager.extract_text(&job).await?;

            let engine = AnalysisEngine::new(&config)?;
            let report = FactsReport::new(engine.job_insights(&job_text), &job.to_string_lossy());

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let generator = ReportGenerator::with_options(config.output.color_output, false, true, true, true);
                println!("{}", generator.console().format_facts_report(&report));
            }
        }

        Commands::Generate { resume, job, out } => {
            validate_input(&resume)?;
            validate_input(&job)?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            let client = match GroqClient::from_env(&config.generation) {
                Ok(client) => Some(client),
                Err(e) => {
                    warn!("Resume rewriting unavailable: {}", e);
                    None
                }
            };
            let generator = ResumeGenerator::new(
                client,
                PdfDocumentWriter::new(),
                Duration::from_secs(config.generation.timeout_secs),
            );

            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message("Optimizing resume...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let bytes = generator.generate(&resume_text, &job_text).await;
            spinner.finish_and_clear();

            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&out, &bytes).await?;
            println!("✅ Optimized resume written to {} ({} bytes)", out.display(), bytes.len());
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    let rendered = toml::to_string_pretty(&config)
                        .map_err(|e| ResumeMatcherError::Configuration(e.to_string()))?;
                    println!("{}", rendered);
                }

                Some(ConfigAction::Path) => println!("{}", path.display()),

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Set { key, value }) => {
                    config.set_value(&key, &value)?;
                    config.save_to(&path)?;
                    println!("🔧 Set {} = {}", key, value);
                }
            }
        }
    }

    Ok(())
}

fn validate_input(path: &Path) -> Result<()> {
    cli::validate_input_file(path).map_err(ResumeMatcherError::InvalidInput)
}
