mod app;
mod cache;
mod catalog;
mod infra;
mod ui;

use std::process::ExitCode;

use app::controller::GalleryController;
use app::error::GalleryError;
use catalog::scanner::scan_images;
use infra::config::AppConfig;

fn main() -> ExitCode {
    infra::logging::init_logging();
    let args: Vec<String> = std::env::args().collect();

    let config = match AppConfig::from_args(&args) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            print_usage();
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(GalleryError::EmptyInput) => {
            println!("{}", GalleryError::EmptyInput);
            ExitCode::SUCCESS
        }
        Err(error @ GalleryError::InvalidInput(_)) => {
            eprintln!("{error}");
            print_usage();
            ExitCode::from(2)
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(1)
        }
    }
}

fn run(config: &AppConfig) -> Result<(), GalleryError> {
    let summary = scan_images(&config.source_dir)?;
    let controller = GalleryController::initialize(summary.images, config.page_size)?
        .with_output_path(&config.output_path);

    ui::app_shell::launch_window(controller, config).map_err(GalleryError::Io)
}

fn print_usage() {
    println!("usage:");
    println!("  image-selector <image_dir> [output_json]");
}
