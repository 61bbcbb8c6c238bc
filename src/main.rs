use anyhow::Result;
use chrono::Utc;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use profile_readme::api::GitHubClient;
use profile_readme::cli::Args;
use profile_readme::display::print_report;
use profile_readme::render::{gather, render_document, write_document};
use profile_readme::status::RandomTags;

fn init_tracing(debug: bool) {
    let default = if debug {
        "profile_readme=debug"
    } else {
        "profile_readme=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args) -> Result<()> {
    let profile = args.profile();
    info!(user = %profile.username, "Starting README generation");

    let client = GitHubClient::new(args.client_config());
    let now = Utc::now();
    let mut tags = RandomTags::from_entropy();
    let sections = gather(&client, &profile, now, &mut tags);
    let report = sections.summary();
    debug!(all_live = sections.all_live(), "fetch pass complete");

    let document = render_document(&profile, sections, now);
    if args.stdout {
        println!("{document}");
        return Ok(());
    }

    write_document(&args.output, &document)?;
    print_report(&args.output.display().to_string(), &report, args.debug);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    if let Err(err) = run(&args) {
        error!(error = %format!("{err:#}"), "README generation failed");
        return Err(err);
    }
    Ok(())
}
