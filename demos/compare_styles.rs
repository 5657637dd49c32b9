//! All three prompting styles applied to one task, back to back.

use prompt_lab::{InferenceClient, InferenceConfig, Prompt};

const QUESTION: &str = "Is 127 a prime number?";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = InferenceConfig::from_env()?;
    let client = InferenceClient::new(config)?;

    let zero_shot = Prompt::question(QUESTION).render();

    let few_shot = Prompt::instruction("Answer Yes or No.")
        .with_example("Is 9 a prime number?", "No")
        .with_example("Is 13 a prime number?", "Yes")
        .with_query(QUESTION)
        .render();

    let chain_of_thought = Prompt::question(QUESTION).with_reasoning_cue().render();

    for (style, prompt) in [
        ("Zero-shot", zero_shot),
        ("Few-shot", few_shot),
        ("Chain-of-thought", chain_of_thought),
    ] {
        println!("=== {style} ===");
        println!("{prompt}\n");
        println!("{}\n", client.generate_text(&prompt).await);
    }

    Ok(())
}
