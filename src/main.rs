use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{self, BufReader},
    sync::Arc,
};
use title_slug::{
    application::{ports::SlugGeneratorPort, services::SlugCommandService},
    config::AppConfig,
    infrastructure::{DefaultSlugGenerator, read_titles},
    presentation::write_slugs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    if let Err(err) = bootstrap() {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_filter());

    let titles = match config.input_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_titles(BufReader::new(file), config.input_format())?
        }
        None => read_titles(io::stdin().lock(), config.input_format())?,
    };

    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);
    let service = SlugCommandService::new(slugger);
    let records = service.slug_batch(titles)?;

    write_slugs(io::stdout().lock(), &records, config.output_format())?;
    Ok(())
}

fn init_tracing(env_filter: &str) {
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
