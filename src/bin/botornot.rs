use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use async_trait::async_trait;
use botornot::{
    BotornotError, DialogStore, DynLlmClient, IncomingMessage, LlmClient, LlmRequest, LlmResponse,
    LocalEchoClient, LoggingConfig, Scorer, ScoringPool, TurnHandler, TurnRequest,
};

/// Offline scoring stub: answers every classification prompt with 0.5.
struct UndecidedClient;

#[async_trait]
impl LlmClient for UndecidedClient {
    async fn generate(&self, _request: LlmRequest) -> botornot::Result<LlmResponse> {
        Ok(LlmResponse {
            content: "0.5".to_string(),
            metadata: None,
        })
    }
}

#[derive(Parser)]
#[command(name = "botornot", version, about = "Human-or-not dialog agent and bot scorer", author)]
struct Cli {
    /// Use the offline echo client instead of the Gemini API.
    #[arg(long, global = true)]
    echo: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive conversation loop: one dialog, turns read from stdin.
    Chat {
        #[arg(long, default_value = "local")]
        dialog_id: String,
    },
    /// Score a single message for the probability it was written by a bot.
    Score {
        text: String,
        #[arg(long, default_value = "adhoc")]
        dialog_id: String,
        #[arg(long, default_value_t = 0)]
        participant_index: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    LoggingConfig::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Chat { dialog_id } => run_chat(dialog_id, cli.echo).await?,
        Command::Score {
            text,
            dialog_id,
            participant_index,
        } => run_score(text, dialog_id, participant_index, cli.echo).await?,
    }
    Ok(())
}

async fn run_chat(dialog_id: String, echo: bool) -> botornot::Result<()> {
    let handler = TurnHandler::new(Arc::new(DialogStore::new()), conversation_client(echo)?);

    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush().ok();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| BotornotError::Upstream(e.into()))?;
        let text = line.trim();
        if text.is_empty() {
            print!("> ");
            io::stdout().flush().ok();
            continue;
        }
        let response = handler
            .handle_turn(TurnRequest {
                dialog_id: dialog_id.clone(),
                last_msg_text: text.to_string(),
                last_message_id: Uuid::new_v4().to_string(),
            })
            .await?;
        println!("{}", response.new_msg_text);
        print!("> ");
        io::stdout().flush().ok();
    }
    Ok(())
}

async fn run_score(
    text: String,
    dialog_id: String,
    participant_index: u32,
    echo: bool,
) -> botornot::Result<()> {
    let scorer = Scorer::new(scoring_pool(echo)?);
    let prediction = scorer
        .score(IncomingMessage {
            id: Uuid::new_v4().to_string(),
            dialog_id,
            text,
            participant_index,
        })
        .await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&prediction)
            .map_err(|e| BotornotError::Upstream(e.into()))?
    );
    Ok(())
}

fn conversation_client(echo: bool) -> botornot::Result<DynLlmClient> {
    if echo {
        return Ok(Arc::new(LocalEchoClient));
    }
    gemini_conversation_client()
}

fn scoring_pool(echo: bool) -> botornot::Result<ScoringPool> {
    if echo {
        let clients: Vec<DynLlmClient> = (0..botornot::config::MIN_SCORING_KEYS)
            .map(|_| Arc::new(UndecidedClient) as DynLlmClient)
            .collect();
        return Ok(ScoringPool::new(clients));
    }
    gemini_scoring_pool()
}

#[cfg(feature = "gemini-client")]
fn gemini_conversation_client() -> botornot::Result<DynLlmClient> {
    let key = botornot::EnvConfig::conversation_key()?;
    Ok(Arc::new(botornot::GeminiClient::new(key)))
}

#[cfg(feature = "gemini-client")]
fn gemini_scoring_pool() -> botornot::Result<ScoringPool> {
    let clients: Vec<DynLlmClient> = botornot::EnvConfig::scoring_keys()?
        .into_iter()
        .map(|key| Arc::new(botornot::GeminiClient::new(key)) as DynLlmClient)
        .collect();
    Ok(ScoringPool::new(clients))
}

#[cfg(not(feature = "gemini-client"))]
fn gemini_conversation_client() -> botornot::Result<DynLlmClient> {
    Err(no_gemini_feature())
}

#[cfg(not(feature = "gemini-client"))]
fn gemini_scoring_pool() -> botornot::Result<ScoringPool> {
    Err(no_gemini_feature())
}

#[cfg(not(feature = "gemini-client"))]
fn no_gemini_feature() -> BotornotError {
    BotornotError::Config(
        "built without the gemini-client feature; pass --echo for the offline client".to_string(),
    )
}
