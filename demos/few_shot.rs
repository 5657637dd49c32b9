//! Few-shot prompting: worked examples ahead of the actual query.
//!
//! This demo uses the typed API so failures are branched on, not parsed out
//! of the output text.

use prompt_lab::{GenerationParams, InferenceClient, InferenceConfig, Prompt, TextGenerator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = InferenceConfig::from_env()?;
    let client = InferenceClient::new(config)?;

    let prompt = Prompt::instruction("Classify the sentiment as Positive or Negative.")
        .with_example("I loved this movie!", "Positive")
        .with_example("The food was awful.", "Negative")
        .with_example("What a wonderful day.", "Positive")
        .with_query("The service was painfully slow.")
        .render();

    println!("Prompt:\n{prompt}\n");

    // Low temperature: classification wants the likeliest label, not variety.
    let params = GenerationParams::default().max_new_tokens(10).temperature(0.2);
    match client.generate(&prompt, params).await {
        Ok(text) => println!("Response:\n{text}"),
        Err(err) => eprintln!("Request failed: {err}"),
    }

    Ok(())
}
