//! Map readiness, random suggestion and the autocomplete flow.

mod common;

use common::{detail, settings, viewport, ScriptedProvider};
use eatnear_core::{Coordinate, GeocodeResult, Suggestion};
use eatnear_session::{markers, MarkerKind, Session, SessionError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn session(provider: ScriptedProvider) -> Session<ScriptedProvider, eatnear_session::Viewport> {
    Session::new(provider, viewport(), settings())
}

#[tokio::test]
async fn map_ready_searches_only_once() {
    let provider = ScriptedProvider::new().page(2, false);
    let mut session = session(provider);

    let first = session.on_map_ready().await;
    let second = session.on_map_ready().await;

    assert_eq!(first.unwrap().appended, 2);
    assert!(second.is_none());
    assert_eq!(session.provider().page_calls(), 1);
    assert_eq!(session.state().search_results().len(), 2);
}

#[tokio::test]
async fn random_suggestion_without_results_is_no_candidates() {
    let mut session = session(ScriptedProvider::new());
    let mut rng = StdRng::seed_from_u64(9);

    let err = session.suggest_random(&mut rng).await.unwrap_err();

    assert_eq!(err, SessionError::NoCandidates);
    assert!(session.state().selected().is_none());
    assert_eq!(session.provider().detail_call_count(), 0);
}

#[tokio::test]
async fn random_suggestion_selects_a_current_result() {
    let mut provider = ScriptedProvider::new().page(4, false);
    for i in 0..4 {
        provider = provider.detail(detail(&format!("p0-{i}")));
    }
    let mut session = session(provider);
    session.on_map_ready().await.unwrap();
    let mut rng = StdRng::seed_from_u64(21);

    let outcome = session.suggest_random(&mut rng).await.unwrap().unwrap();

    assert!(outcome.is_applied());
    let selected = session.state().selected().unwrap().clone();
    assert!(session.state().search_results().contains(&selected));
    assert_eq!(session.state().detail().unwrap().place_id, selected.place_id);
}

#[tokio::test]
async fn blank_autocomplete_input_skips_provider() {
    let session = session(ScriptedProvider::new().suggestions(vec![]));

    assert!(session.autocomplete("   ").await.is_empty());
    assert!(session.provider().autocomplete_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn autocomplete_forwards_configured_scope() {
    let suggestions = vec![Suggestion {
        place_id: "s1".to_owned(),
        description: "Roppongi Hills, Tokyo".to_owned(),
    }];
    let session = session(ScriptedProvider::new().suggestions(suggestions.clone()));

    let got = session.autocomplete("roppongi").await;

    assert_eq!(got, suggestions);
    let calls = session.provider().autocomplete_calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    let (input, options) = &calls[0];
    assert_eq!(input, "roppongi");
    assert_eq!(options.country, "jp");
    assert_eq!(options.language, "ja");
    assert_eq!(options.radius_m, 1000);
    assert_eq!(options.types, ["restaurant", "food"]);
}

#[tokio::test]
async fn autocomplete_failure_yields_no_suggestions() {
    let session = session(ScriptedProvider::new());
    assert!(session.autocomplete("sushi").await.is_empty());
}

#[tokio::test]
async fn selected_suggestion_is_geocoded_and_resolved() {
    let at = Coordinate::new(35.6605, 139.7292);
    let provider = ScriptedProvider::new()
        .geocoded(GeocodeResult {
            place_id: "geo-1".to_owned(),
            formatted_address: "6-10-1 Roppongi, Minato City, Tokyo".to_owned(),
            location: at,
        })
        .detail(detail("geo-1"));
    let mut session = session(provider);

    let outcome = session
        .select_suggestion("Roppongi Hills, Tokyo")
        .await
        .unwrap();

    assert!(outcome.is_applied());
    let selected = session.state().selected().unwrap();
    assert_eq!(selected.place_id, "geo-1");
    assert_eq!(selected.name, "6-10-1 Roppongi, Minato City, Tokyo");
    assert_eq!(session.surface().center, at);

    let drawn = markers(session.state());
    assert_eq!(drawn.last().unwrap().kind, MarkerKind::Selection);
}

#[tokio::test]
async fn suggestion_without_geocode_match_leaves_selection() {
    let mut session = session(ScriptedProvider::new());

    assert!(session.select_suggestion("nowhere").await.is_none());
    assert!(session.state().selected().is_none());
    assert_eq!(
        session.provider().geocode_calls.lock().unwrap().as_slice(),
        ["nowhere"]
    );
}
