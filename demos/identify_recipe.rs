/// Recipe Suggestion Example
///
/// Photographs of ingredients go in, detected ingredients and recipe ideas come out.
///
/// Usage:
///   cargo run --example identify_recipe -- path/to/fridge.png
use identilens::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: cargo run --example identify_recipe -- <image.jpg>");
        std::process::exit(1);
    };

    let identifier = Identifier::from_config(&AppConfig::from_env());
    let image = ImageFile::new(path)?;

    println!("Looking for ingredients...");

    match identifier.identify_recipe(&image).await {
        Ok(result) => {
            println!("{}", RecipeReport::new(&result));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
