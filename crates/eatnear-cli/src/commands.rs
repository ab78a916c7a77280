//! Command handlers. Each builds a live client from config, drives a session
//! and prints to stdout.

use anyhow::Context;
use eatnear_core::{AppConfig, PlaceDetail};
use eatnear_places::GooglePlacesClient;
use eatnear_session::{markers, radius_circle, DetailOutcome, PagingEnd, Session, Viewport};

use crate::render;

const PHOTO_MAX_WIDTH: u32 = 400;

type LiveSession = Session<GooglePlacesClient, Viewport>;

fn live_session(config: &AppConfig) -> anyhow::Result<LiveSession> {
    let client = GooglePlacesClient::from_config(config).context("building places client")?;
    let viewport = Viewport::new(config.origin, config.map_zoom);
    Ok(Session::from_config(client, viewport, config))
}

fn photo_urls(client: &GooglePlacesClient, detail: &PlaceDetail) -> Vec<String> {
    detail
        .photos
        .iter()
        .filter_map(|p| match client.photo_url(&p.photo_reference, PHOTO_MAX_WIDTH) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "skipping photo");
                None
            }
        })
        .collect()
}

fn print_selected_detail(
    session: &LiveSession,
    outcome: Option<DetailOutcome>,
) -> anyhow::Result<()> {
    match outcome {
        Some(DetailOutcome::Applied) => {}
        Some(DetailOutcome::Failed(e)) => return Err(e).context("loading place details"),
        Some(DetailOutcome::Stale) | None => {
            anyhow::bail!("no details available for the selected place");
        }
    }
    let detail = session
        .state()
        .detail()
        .context("detail missing after a successful lookup")?;
    println!("{}", render::detail_panel(detail, &photo_urls(session.provider(), detail)));
    Ok(())
}

/// Runs the nearby search, reporting a partial or truncated result set.
async fn search(session: &mut LiveSession) -> anyhow::Result<()> {
    let Some(summary) = session.on_map_ready().await else {
        return Ok(());
    };
    match summary.end {
        PagingEnd::Exhausted => {}
        PagingEnd::PageLimit => {
            eprintln!("stopped after {} pages; more results were available", summary.pages);
        }
        PagingEnd::Failed(e) if summary.pages == 0 => {
            return Err(e).context("nearby search failed");
        }
        PagingEnd::Failed(e) => {
            eprintln!("search ended early after {} pages: {e}", summary.pages);
        }
    }
    Ok(())
}

pub(crate) async fn run_nearby(config: &AppConfig) -> anyhow::Result<()> {
    let mut session = live_session(config)?;
    search(&mut session).await?;

    let state = session.state();
    if state.search_results().is_empty() {
        println!(
            "no restaurants found within {} m of {}",
            config.search_radius_m,
            state.origin()
        );
        return Ok(());
    }
    print!("{}", render::results_table(state.search_results()));
    println!();
    print!(
        "{}",
        render::overlay_summary(&markers(state), &radius_circle(state, config.search_radius_m))
    );
    Ok(())
}

pub(crate) async fn run_suggest(config: &AppConfig) -> anyhow::Result<()> {
    let mut session = live_session(config)?;
    search(&mut session).await?;

    let mut rng = rand::rng();
    let outcome = session
        .suggest_random(&mut rng)
        .await
        .context("picking a random restaurant")?;
    print_selected_detail(&session, outcome)
}

/// Fetches details straight from the provider. No selection is made: an id
/// alone has no coordinate to resolve or pan to.
pub(crate) async fn run_detail(config: &AppConfig, place_id: &str) -> anyhow::Result<()> {
    let client = GooglePlacesClient::from_config(config).context("building places client")?;
    let detail = client
        .place_details(place_id)
        .await
        .with_context(|| format!("loading details for {place_id}"))?;
    println!("{}", render::detail_panel(&detail, &photo_urls(&client, &detail)));
    Ok(())
}

pub(crate) async fn run_search(
    config: &AppConfig,
    text: &str,
    pick: Option<usize>,
) -> anyhow::Result<()> {
    let mut session = live_session(config)?;
    let suggestions = session.autocomplete(text).await;
    if suggestions.is_empty() {
        println!("no suggestions for \"{text}\"");
        return Ok(());
    }

    let Some(pick) = pick else {
        print!("{}", render::suggestions_list(&suggestions));
        return Ok(());
    };
    let chosen = pick
        .checked_sub(1)
        .and_then(|i| suggestions.get(i))
        .with_context(|| format!("--pick must be between 1 and {}", suggestions.len()))?;

    let description = chosen.description.clone();
    let outcome = session.select_suggestion(&description).await;
    if outcome.is_none() {
        anyhow::bail!("could not locate \"{description}\"");
    }
    print_selected_detail(&session, outcome)
}
