use std::io::Read;

use dotenv::dotenv;

use content_optimizer::{GeminiClient, GeminiConfig, Optimizer, Platform};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::builder().filter_level(log::LevelFilter::Info).init();

    let mut args = std::env::args().skip(1);
    let Some(platform_arg) = args.next() else {
        eprintln!("Użycie: content-optimizer <youtube|x|facebook> [treść]");
        std::process::exit(2);
    };
    let Some(platform) = Platform::from_str(&platform_arg) else {
        eprintln!("Nieznana platforma: \"{platform_arg}\". Wybierz youtube, x lub facebook.");
        std::process::exit(2);
    };

    // Draft text comes from the remaining arguments, or stdin when piped.
    let rest: Vec<String> = args.collect();
    let raw_input = if rest.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        rest.join(" ")
    };
    let raw_input = raw_input.trim();

    // The optimizer assumes non-empty input; the caller rejects it first.
    if raw_input.is_empty() {
        eprintln!("Wpisz treść do analizy.");
        std::process::exit(2);
    }

    let config = GeminiConfig::from_env()?;
    let optimizer = Optimizer::new(GeminiClient::new(config));

    println!("🤖 Analizowanie ({})...", platform.name());

    let result = match optimizer.optimize(platform, raw_input).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("❌ Błąd analizy: {e}");
            std::process::exit(1);
        }
    };

    println!("\n💡 Kluczowe Wskazówki");
    println!("--------------------------------------------------");
    for guideline in &result.guidelines {
        println!("• {}", guideline.title);
        println!("  {}", guideline.explanation);
    }

    let results_header = match platform {
        Platform::YouTube => "Sugerowane Tytuły",
        _ => "Sugerowane Posty",
    };
    println!("\n✨ {results_header}");
    println!("--------------------------------------------------");
    for (i, suggestion) in result.suggestions.iter().enumerate() {
        println!("{}. {}", i + 1, suggestion.content);
        println!("   {}", suggestion.reason);
    }

    if let Some(tags) = result.tags.as_deref().filter(|t| !t.is_empty()) {
        println!("\n🏷️  Sugerowane Tagi: {}", tags.join(", "));
    }

    Ok(())
}
