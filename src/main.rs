use clap::Parser;
use kuadrant_dnspolicy::cli::Cli;
use kuadrant_dnspolicy::config::{load_draft, Settings};
use kuadrant_dnspolicy::domain::{SubmitOutcome, ViewMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    let mut page = kuadrant_dnspolicy::create_page(&settings);
    if let Some(draft) = &cli.draft {
        page.set_fields(load_draft(draft)?);
    }
    page.set_view_mode(cli.view);

    info!(
        namespace = %settings.console.namespace,
        view = %page.view_mode(),
        submittable = page.is_submittable(),
        "Create DNSPolicy"
    );

    if cli.dry_run {
        print!("{}", page.document_yaml()?);
        return Ok(());
    }

    if page.view_mode() == ViewMode::Document {
        print!("{}", page.editor().text());
    }

    match page.submit().await {
        SubmitOutcome::Created { redirect } => {
            println!(
                "DNSPolicy {}/{} created ({})",
                page.document().metadata.namespace,
                page.document().metadata.name,
                redirect
            );
            Ok(())
        }
        SubmitOutcome::Refused(refusal) => anyhow::bail!("Cannot create DNSPolicy: {}", refusal),
        SubmitOutcome::Failed { message } => anyhow::bail!("Error creating DNSPolicy: {}", message),
    }
}
