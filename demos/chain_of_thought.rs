//! Chain-of-thought prompting: the same word problem with and without the
//! reasoning cue, to compare the answers side by side.

use prompt_lab::{InferenceClient, InferenceConfig, Prompt};

const QUESTION: &str =
    "A cafeteria had 23 apples. They used 20 to make lunch and bought 6 more. \
     How many apples do they have?";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = InferenceConfig::from_env()?;
    let client = InferenceClient::new(config)?;

    let direct = Prompt::question(QUESTION).render();
    println!("--- Without reasoning cue ---\n{direct}\n");
    println!("{}\n", client.generate_text(&direct).await);

    let step_by_step = Prompt::question(QUESTION).with_reasoning_cue().render();
    println!("--- With reasoning cue ---\n{step_by_step}\n");
    println!("{}", client.generate_text(&step_by_step).await);

    Ok(())
}
