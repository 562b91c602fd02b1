//! Command line interface

use crate::config::{Config, MAX_DELAY_SECS, MIN_DELAY_SECS};
use crate::core::{
    ArticleOutcome, ArticleParams, BatchGenerator, BatchReport, BatchRequest, MAX_ARTICLES,
    OutputStore,
};
use crate::license::{
    Certificate, CertificateAuthority, DEFAULT_PROBE_MODEL, DashScopeProbe, LicenseGate,
    check_credential_live,
};
use crate::sdk::DashScopeClient;
use crate::utils::mask_credential;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub const ENV_API_KEY: &str = "DASHSCOPE_API_KEY";
pub const ENV_CERTIFICATE: &str = "ARTICLE_FORGE_CERTIFICATE";

/// Batch-generate illustrated articles with DashScope, behind a license certificate
#[derive(Debug, Parser)]
#[command(name = "article-forge", version, about, long_about = None)]
pub struct Cli {
    /// YAML config file (default: config/article-forge.yaml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Issue a certificate for an API key
    Issue(IssueArgs),
    /// Check a certificate against an API key (exit code 0 when valid)
    Verify(VerifyArgs),
    /// Ask DashScope whether an API key is accepted
    CheckKey(KeyArgs),
    /// Log in and run a batch
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct KeyArgs {
    /// DashScope API key
    #[arg(long, env = ENV_API_KEY, hide_env_values = true)]
    pub api_key: String,
}

#[derive(Debug, Args)]
pub struct IssueArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Validity in days; zero or negative gives an already expired certificate
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<i64>,
}

#[derive(Debug, Args)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Certificate issued for the API key
    #[arg(long, env = ENV_CERTIFICATE, hide_env_values = true)]
    pub certificate: String,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub login: VerifyArgs,

    /// Main topic the article titles are derived from
    #[arg(long, default_value = "人工智能在未来的发展趋势")]
    pub topic: String,

    /// Number of articles
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=MAX_ARTICLES as i64))]
    pub count: u16,

    /// Article model (default: generation.llm_model)
    #[arg(long)]
    pub llm_model: Option<String>,

    /// Image model (default: generation.image_model)
    #[arg(long)]
    pub image_model: Option<String>,

    #[arg(long, default_value = "通用读者")]
    pub audience: String,

    #[arg(long, default_value = "科普性")]
    pub style: String,

    #[arg(long, default_value = "中篇（600-900字）")]
    pub length: String,

    /// Comma separated keywords
    #[arg(long, default_value = "AI, 大数据, 未来科技")]
    pub keywords: String,

    /// Extra writing requirements
    #[arg(long, default_value = "")]
    pub extra: String,

    /// Seconds between articles (default: generation.delay_secs)
    #[arg(long, value_parser = clap::value_parser!(u64).range(MIN_DELAY_SECS..=MAX_DELAY_SECS))]
    pub delay: Option<u64>,

    /// Skip illustration
    #[arg(long)]
    pub no_images: bool,
}

impl GenerateArgs {
    pub fn to_request(&self, config: &Config) -> BatchRequest {
        let params = ArticleParams {
            audience: self.audience.clone(),
            style: self.style.clone(),
            length: self.length.clone(),
            keywords: ArticleParams::parse_keywords(&self.keywords),
            extra_requirements: self.extra.clone(),
        };
        let delay = self.delay.unwrap_or(config.generation.delay_secs);

        let mut request = BatchRequest::new(self.topic.clone(), usize::from(self.count))
            .with_params(params)
            .with_delay(Duration::from_secs(delay));
        if let Some(model) = &self.llm_model {
            request = request.with_llm_model(model.clone());
        }
        if let Some(model) = &self.image_model {
            request = request.with_image_model(model.clone());
        }
        if self.no_images {
            request = request.without_images();
        }
        request
    }
}

/// Run a parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load(cli.config.as_deref()).await?;

    match cli.command {
        Command::Issue(args) => issue(&config, args),
        Command::Verify(args) => verify(&config, args),
        Command::CheckKey(args) => check_key(&config, args).await,
        Command::Generate(args) => generate(&config, args).await,
    }
}

fn issue(config: &Config, args: IssueArgs) -> anyhow::Result<ExitCode> {
    let authority = CertificateAuthority::from_config(&config.license)?;
    let days = args.days.unwrap_or_else(|| authority.default_validity_days());
    let certificate = authority.issue(&args.key.api_key, days)?;

    let expires = Certificate::parse(&certificate)?
        .expires_at()
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "unknown".to_string());
    info!(
        "Issued certificate for {} valid {} day(s)",
        mask_credential(&args.key.api_key),
        days
    );

    println!("{}", certificate);
    eprintln!("Expires: {}", expires);
    Ok(ExitCode::SUCCESS)
}

fn verify(config: &Config, args: VerifyArgs) -> anyhow::Result<ExitCode> {
    let authority = CertificateAuthority::from_config(&config.license)?;
    if authority.verify(&args.key.api_key, &args.certificate) {
        println!("valid");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("invalid");
        Ok(ExitCode::FAILURE)
    }
}

async fn check_key(config: &Config, args: KeyArgs) -> anyhow::Result<ExitCode> {
    if check_credential_live(&config.dashscope, DEFAULT_PROBE_MODEL, &args.api_key).await {
        println!("API key accepted");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("API key rejected");
        Ok(ExitCode::FAILURE)
    }
}

async fn generate(config: &Config, args: GenerateArgs) -> anyhow::Result<ExitCode> {
    let authority = CertificateAuthority::from_config(&config.license)?;
    let probe = DashScopeProbe::new(config.dashscope.clone());
    let gate = LicenseGate::new(Arc::new(authority), Arc::new(probe));

    let session = match gate
        .login(&args.login.key.api_key, &args.login.certificate)
        .await
    {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Login failed: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let client = Arc::new(DashScopeClient::for_session(config.dashscope.clone(), &session)?);
    let generator = BatchGenerator::new(
        client.clone(),
        client,
        OutputStore::new(&config.output.root_dir),
        config.generation.clone(),
    );

    let request = args.to_request(config);
    let report = generator.run(&request).await?;
    print_report(&report);

    let html = generator.store().list_html().await?;
    if !html.is_empty() {
        println!("\nGenerated HTML (newest first):");
        for path in html {
            println!("  {}", path.display());
        }
    }

    session.logout();
    Ok(if report.completed() > 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_report(report: &BatchReport) {
    println!(
        "Batch '{}': {} completed, {} skipped",
        report.main_topic,
        report.completed(),
        report.skipped()
    );
    for outcome in &report.outcomes {
        match outcome {
            ArticleOutcome::Completed { index, title, .. } => {
                println!("  [{}] {} ... done", index, title)
            }
            ArticleOutcome::Skipped {
                index,
                title,
                reason,
            } => println!("  [{}] {} ... skipped: {}", index, title, reason),
        }
    }
}
