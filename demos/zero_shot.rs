//! Zero-shot prompting: ask a question with no worked examples.
//!
//! ```bash
//! export API_KEY=your_api_key_here
//! export MODEL_NAME=org/model-name
//! cargo run --example zero_shot
//! ```

use prompt_lab::{InferenceClient, InferenceConfig, Prompt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();
    let config = InferenceConfig::from_env()?;
    let client = InferenceClient::new(config)?;

    let prompt = Prompt::question("What is the capital of France?").render();
    println!("Prompt:\n{prompt}\n");

    println!("Response:\n{}", client.generate_text(&prompt).await);

    Ok(())
}
