mod config;
mod script;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use trip::dom::Document;
use trip::model::{DestinationsModel, OffersModel, PointsModel, TripData};
use trip::point_presenter::PointPresenterFactory;
use trip::presenter::{PresenterError, TripContext, TripPresenter};
use trip::view::TripEventsView;

use crate::config::{AppConfig, ConfigError};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON in {path}: {source}")]
    Json { path: PathBuf, source: serde_json::Error },
    #[error(transparent)]
    Presenter(#[from] PresenterError),
}

#[derive(Parser, Debug)]
#[command(name = "big-trip", about = "Render a trip and replay a scripted session against it")]
struct Cli {
    /// Trip JSON with `points`, `offers` and `destinations`.
    #[arg(long)]
    points: Option<PathBuf>,

    /// Script of user steps to replay after the initial render.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Initial and reset sort type.
    #[arg(long, value_parser = config::parse_sort)]
    sort: Option<trip::consts::SortType>,

    /// Filter context for the empty-state message.
    #[arg(long, value_parser = config::parse_filter)]
    filter: Option<trip::consts::FilterType>,

    /// Print the page after every step, not only at the end.
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "big-trip failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = AppConfig::from_env()?;
    if let Some(points) = cli.points {
        config.points_file = Some(points);
    }
    if let Some(sort) = cli.sort {
        config.default_sort = sort;
    }
    if let Some(filter) = cli.filter {
        config.filter = filter;
    }

    let path = config.require_points_file()?.clone();
    let data = TripData::from_json(&read(&path)?).map_err(|source| AppError::Json { path: path.clone(), source })?;
    tracing::info!(
        points = data.points.len(),
        destinations = data.destinations.len(),
        path = %path.display(),
        "trip loaded"
    );

    let document = Document::new(&TripEventsView);
    let ctx = TripContext {
        document: document.clone(),
        container: document.root(),
        points_model: Rc::new(PointsModel::new(data.points)),
        offers_model: Rc::new(OffersModel::new(data.offers)),
        destinations_model: Rc::new(DestinationsModel::new(data.destinations)),
    };
    let mut presenter =
        TripPresenter::new(ctx, PointPresenterFactory).with_default_sort(config.default_sort).with_filter(config.filter);
    presenter.init()?;

    if let Some(script_path) = cli.script {
        let steps =
            script::parse(&read(&script_path)?).map_err(|source| AppError::Json { path: script_path.clone(), source })?;
        for step in steps {
            script::apply(&mut presenter, step)?;
            if cli.trace {
                println!("{}", document.to_html());
            }
        }
    }

    println!("{}", document.to_html());
    presenter.destroy()?;
    Ok(())
}

fn read(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|source| AppError::Read { path: path.to_path_buf(), source })
}
