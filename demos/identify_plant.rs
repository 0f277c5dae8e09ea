/// Plant Identification Example
///
/// Sends one photo to the vision model and prints the diagnosis report.
///
/// Usage:
///   cargo run --example identify_plant -- path/to/leaf.jpg
///
/// Requirements:
///   - GEMINI_API_KEY set in the environment or a .env file
///   - or USE_MOCK_API=true to print the canned tomato diagnosis
use identilens::prelude::*;
use identilens::render::PlantTab;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: cargo run --example identify_plant -- <image.jpg>");
        std::process::exit(1);
    };

    let config = AppConfig::from_env();
    if !config.use_mock && !config.has_api_key() {
        eprintln!("Set GEMINI_API_KEY, or USE_MOCK_API=true to try the mock data");
        std::process::exit(1);
    }

    let identifier = Identifier::from_config(&config);
    let image = ImageFile::new(path)?;

    println!("Identifying plant in {}...", image.path().display());
    println!();

    let state = ScreenState::from_result(identifier.identify_plant(&image).await);
    match state.map(PlantReport::new) {
        ScreenState::Loaded(report) => {
            let tabs: Vec<_> = report.tabs.iter().map(|t: &PlantTab| t.label()).collect();
            println!("{}", report);
            println!("Tabs: {}", tabs.join(" | "));
        }
        ScreenState::Failed { message, .. } => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
        ScreenState::Loading => unreachable!(),
    }

    Ok(())
}
