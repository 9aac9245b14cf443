//! Terminal front end for the order assistant.
//!
//! Reads one message per line from stdin and prints the assistant's replies
//! as they land in the transcript. Lines typed while the assistant is still
//! replying are refused, exactly like a disabled input box.
//!
//! Usage: `order-assistant [config.toml]`

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use order_assistant::adapters::{demo_catalog, SeededRandomSource, SimulatedOrderService, SystemClock};
use order_assistant::application::{
    ChatSession, GetTranscriptHandler, GetTranscriptQuery, StartConversationCommand,
    StartConversationHandler, SubmitMessageCommand, SubmitMessageError, SubmitMessageHandler,
};
use order_assistant::config::AppConfig;
use order_assistant::domain::dialogue::MessageKind;
use order_assistant::ports::{Clock, RandomSource};
use order_assistant::telemetry;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load_from_file(&path)
            .with_context(|| format!("failed to load configuration from {}", path))?,
        None => AppConfig::load().context("failed to load configuration")?,
    };
    config.validate().context("invalid configuration")?;
    telemetry::init(&config.logging);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let random: Arc<dyn RandomSource> = match config.orders.seed {
        Some(seed) => Arc::new(SeededRandomSource::from_seed(seed)),
        None => Arc::new(SeededRandomSource::from_entropy()),
    };
    let orders = SimulatedOrderService::new(clock.clone(), random)
        .with_catalog(demo_catalog())
        .with_latency(config.orders.latency())
        .with_failure_rate(config.orders.failure_rate);
    tracing::info!(?orders, "Order service ready");

    let submit = Arc::new(SubmitMessageHandler::with_pacing(
        Arc::new(orders),
        clock.clone(),
        config.dialogue.pacing(),
    ));
    let session = StartConversationHandler::new(clock)
        .handle(StartConversationCommand::default())?
        .session;

    let renderer = tokio::spawn(render_loop(session.clone()));
    let mut in_flight: Option<JoinHandle<()>> = None;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        if session.is_typing() {
            println!("(please wait, the assistant is still replying)");
            continue;
        }
        let (session, submit) = (session.clone(), submit.clone());
        in_flight = Some(tokio::spawn(async move {
            run_turn(&submit, &session, line).await;
        }));
    }

    if let Some(turn) = in_flight {
        turn.await?;
    }
    tokio::time::sleep(POLL_INTERVAL * 2).await;
    renderer.abort();
    Ok(())
}

async fn run_turn(submit: &SubmitMessageHandler, session: &ChatSession, line: String) {
    match submit.handle(session, SubmitMessageCommand::new(line)).await {
        Ok(result) => tracing::debug!(replies = result.replies.len(), "Turn finished"),
        Err(SubmitMessageError::Busy) => {
            println!("(please wait, the assistant is still replying)");
        }
        Err(err) => tracing::warn!(error = %err, code = %err.code(), "Turn rejected"),
    }
}

/// Prints assistant messages and the typing indicator as they appear.
async fn render_loop(session: Arc<ChatSession>) {
    let transcript = GetTranscriptHandler::new();
    let mut since = 0;
    let mut was_typing = false;
    let mut ticker = tokio::time::interval(POLL_INTERVAL);

    loop {
        ticker.tick().await;
        let update = transcript
            .handle(&session, GetTranscriptQuery { since })
            .await;

        for message in update.messages.iter().filter(|m| m.is_assistant()) {
            let marker = match message.kind() {
                Some(MessageKind::Error) => " (!)",
                _ => "",
            };
            println!(
                "[{}] Assistant{}: {}",
                message.timestamp().clock_time(),
                marker,
                message.text()
            );
        }
        if update.is_typing && !was_typing {
            println!("Assistant is typing...");
        }

        since = update.next_index;
        was_typing = update.is_typing;
    }
}
