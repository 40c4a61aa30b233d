//! Terminal countdown client
//!
//! Polls a running server for the timer record and re-derives the display
//! locally between polls, so the countdown stays smooth even when polls
//! fail or arrive late.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Context;
use tokio::time::interval;
use tracing::debug;

use super::countdown::{format_clock, Countdown, Tick, TimerPhase};
use crate::api::responses::TimerResponse;
use crate::state::now_ms;
use crate::utils::shutdown_signal;

/// How often the display is re-derived between polls
const RENDER_INTERVAL: Duration = Duration::from_millis(250);

/// Terminal client configuration
pub struct WatchConfig {
    pub url: String,
    pub poll_secs: u64,
}

/// Poll the server and render the countdown in place until interrupted.
pub async fn watch(config: WatchConfig) -> anyhow::Result<()> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .context("failed to create HTTP client")?;
    let endpoint = format!("{}/api/timer", config.url.trim_end_matches('/'));

    println!("Watching {}", endpoint);

    let mut countdown = Countdown::new();
    let mut render = interval(RENDER_INTERVAL);
    let mut poll = interval(Duration::from_secs(config.poll_secs.max(1)));

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            // First poll fires immediately, before the first render
            _ = poll.tick() => {
                sync_once(&http, &endpoint, &mut countdown).await;
            }
            _ = render.tick() => {
                let tick = countdown.tick(now_ms());
                render_line(&tick)?;
                if tick.fire_alarm {
                    ring_bell()?;
                }
            }
            _ = &mut shutdown => {
                println!();
                break;
            }
        }
    }

    Ok(())
}

/// Fetch the slot once. Transport and decode failures keep the last-known
/// record and the countdown keeps ticking from it.
async fn sync_once(http: &reqwest::Client, endpoint: &str, countdown: &mut Countdown) {
    match fetch_state(http, endpoint).await {
        Ok(response) => countdown.sync(response.timer.map(|t| t.record())),
        Err(e) => debug!("Poll failed, keeping last known record: {}", e),
    }
}

async fn fetch_state(
    http: &reqwest::Client,
    endpoint: &str,
) -> Result<TimerResponse, reqwest::Error> {
    http.get(endpoint)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

fn render_line(tick: &Tick) -> io::Result<()> {
    let mut out = io::stdout();
    match tick.phase {
        TimerPhase::Idle => write!(out, "\r  --:--  no active timer    ")?,
        TimerPhase::Active => write!(out, "\r  {}  remaining          ", format_clock(tick.remaining_ms))?,
        TimerPhase::Finished => write!(out, "\r  00:00  time's up!         ")?,
    }
    out.flush()
}

fn ring_bell() -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "\x07")?;
    out.flush()
}
