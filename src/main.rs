//! ats-scorer: score how well a resume survives an applicant tracking system

use ats_scorer::cli::{self, Cli, Commands, ConfigAction};
use ats_scorer::config::{Config, OutputFormat};
use ats_scorer::error::{AtsScorerError, Result};
use ats_scorer::input::file_detector::{JOB_EXTENSIONS, RESUME_EXTENSIONS};
use ats_scorer::input::InputManager;
use ats_scorer::output::{save_report_to_file, suggest_filename, JobSource, ReportGenerator, ScoreReport};
use ats_scorer::processing::AtsScorer;
use clap::Parser;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
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

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            job_text,
            output,
            save,
            detailed,
        } => {
            let output_format = match output {
                Some(output) => cli::parse_output_format(&output).map_err(AtsScorerError::InvalidInput)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;
            let started = Instant::now();

            info!("Scoring resume: {}", resume.display());

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_restricted(&resume, RESUME_EXTENSIONS).await?;

            let (job_description, job_source) = match (job, job_text) {
                (Some(path), _) => {
                    let text = input_manager.extract_restricted(&path, JOB_EXTENSIONS).await?;
                    (Some(text), JobSource::File(path.display().to_string()))
                }
                (None, Some(text)) => (Some(text), JobSource::Inline),
                (None, None) => (None, JobSource::None),
            };

            let scorer = AtsScorer::from_config(&config)?;
            let result = scorer.score(&resume_text, job_description.as_deref())?;
            let coverage = detailed.then(|| scorer.keyword_coverage(&resume_text));

            let report = ScoreReport::new(
                result,
                coverage,
                resume.display().to_string(),
                job_source,
                started.elapsed().as_millis() as u64,
            );

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed,
                true,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, output_format)?;

            match save {
                Some(path) => {
                    let path = report_path(path, output_format, &resume);
                    save_report_to_file(&rendered, &path)?;
                    println!("💾 Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Vocab { soft, hard } => {
            let show_all = !soft && !hard;

            if soft || show_all {
                println!("🤝 Soft skills ({}):", config.vocabulary.soft_skills.len());
                for skill in &config.vocabulary.soft_skills {
                    println!("  • {}", skill);
                }
            }
            if hard || show_all {
                println!("🛠️  Hard skills ({}):", config.vocabulary.hard_skills.len());
                for skill in &config.vocabulary.hard_skills {
                    println!("  • {}", skill);
                }
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    let rendered = toml::to_string_pretty(&config).map_err(|e| {
                        AtsScorerError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("{}", rendered);

                    let policy = *AtsScorer::from_config(&config)?.policy();
                    println!("📊 Scoring policy:");
                    println!(
                        "  Similarity weight: {:.0}% (with a job description)",
                        policy.similarity_weight * 100.0
                    );
                    println!("  Feature weight: {:.0}%", policy.feature_weight * 100.0);
                    println!(
                        "  Suggestion thresholds: impact {} / brevity {} / style {} / sections {} / soft {} / hard {} / similarity {:.0}%",
                        policy.thresholds.impact,
                        policy.thresholds.brevity,
                        policy.thresholds.style,
                        policy.thresholds.sections,
                        policy.thresholds.soft_skills,
                        policy.thresholds.hard_skills,
                        policy.thresholds.similarity * 100.0
                    );
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::reset_at(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Resolve `--save`: a directory gets a generated file name inside it
fn report_path(save: PathBuf, format: OutputFormat, resume: &Path) -> PathBuf {
    if save.is_dir() {
        save.join(suggest_filename(format, &resume.to_string_lossy(), true))
    } else {
        save
    }
}
