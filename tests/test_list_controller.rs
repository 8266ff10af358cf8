//! `ListController` against a scripted catalog source.

mod common;

use common::{Scripted, ScriptedCatalog};
use storefront_sdk::{ListController, ListPhase, Route, ScrollMetrics};

// ---------------------------------------------------------------------------
// load
// ---------------------------------------------------------------------------

#[test]
fn load_stores_snapshot_and_exposes_initial_window() {
    let source = ScriptedCatalog::with_responses(vec![Scripted::ok(common::sample_products(20))]);
    let mut list = ListController::new(source.clone());

    list.load().unwrap();

    assert_eq!(source.calls(), 1);
    assert_eq!(list.state().phase(), ListPhase::Ready);
    assert!(!list.state().is_loading());
    assert_eq!(list.visible_prefix().len(), 7);
    assert!(list.has_more());
}

#[test]
fn load_failure_leaves_snapshot_absent() {
    let source = ScriptedCatalog::with_responses(vec![Scripted::fail()]);
    let mut list = ListController::new(source);

    let err = list.load().unwrap_err();

    assert!(err.is_fetch());
    assert!(list.state().snapshot().is_none());
    assert!(!list.state().is_loading());
    assert!(list.visible_prefix().is_empty());
    assert!(matches!(list.state().phase(), ListPhase::Failed { .. }));
}

#[test]
fn retry_after_failure_recovers() {
    let source = ScriptedCatalog::with_responses(vec![
        Scripted::fail(),
        Scripted::ok(common::sample_products(3)),
    ]);
    let mut list = ListController::new(source.clone());

    assert!(list.load().is_err());
    list.retry().unwrap();

    assert_eq!(source.calls(), 2);
    assert_eq!(list.state().phase(), ListPhase::Ready);
    assert_eq!(list.visible_prefix().len(), 3);
}

// ---------------------------------------------------------------------------
// refresh
// ---------------------------------------------------------------------------

#[test]
fn refresh_replaces_snapshot_without_resetting_window() {
    let source = ScriptedCatalog::with_responses(vec![
        Scripted::ok(common::sample_products(30)),
        Scripted::ok(common::sample_products(12)),
    ]);
    let mut list = ListController::new(source);
    list.load().unwrap();
    list.reveal_more();
    list.reveal_more();
    assert_eq!(list.state().visible_count(), 27);

    list.refresh().unwrap();

    assert!(!list.state().is_refreshing());
    assert_eq!(list.state().snapshot().unwrap().len(), 12);
    assert_eq!(list.state().visible_count(), 27);
    assert_eq!(list.visible_prefix().len(), 12);
    assert!(!list.has_more());
}

#[test]
fn failed_refresh_keeps_previous_snapshot() {
    let source = ScriptedCatalog::with_responses(vec![
        Scripted::ok(common::sample_products(9)),
        Scripted::fail(),
    ]);
    let mut list = ListController::new(source);
    list.load().unwrap();

    assert!(list.refresh().is_err());

    assert!(!list.state().is_refreshing());
    assert_eq!(list.state().snapshot().unwrap().len(), 9);
    assert_eq!(list.state().phase(), ListPhase::Ready);
}

// ---------------------------------------------------------------------------
// reveal / scroll
// ---------------------------------------------------------------------------

#[test]
fn scroll_trigger_reveals_once_per_content_length() {
    let source = ScriptedCatalog::with_responses(vec![Scripted::ok(common::sample_products(40))]);
    let mut list = ListController::new(source);
    list.load().unwrap();

    let near_end = ScrollMetrics {
        offset: 610.0,
        viewport_len: 100.0,
        content_len: 700.0,
    };
    assert!(list.on_scroll(near_end));
    assert!(!list.on_scroll(near_end));
    assert_eq!(list.state().visible_count(), 17);

    let grown = ScrollMetrics {
        offset: 1_610.0,
        viewport_len: 100.0,
        content_len: 1_700.0,
    };
    assert!(list.on_scroll(grown));
    assert_eq!(list.state().visible_count(), 27);
}

#[test]
fn reveal_more_before_load_is_noop() {
    let source = ScriptedCatalog::default();
    let mut list = ListController::new(source.clone());
    list.reveal_more();
    assert_eq!(list.state().visible_count(), 7);
    assert_eq!(source.calls(), 0);
}

// ---------------------------------------------------------------------------
// cards / open
// ---------------------------------------------------------------------------

#[test]
fn cards_follow_visible_prefix() {
    let source = ScriptedCatalog::with_responses(vec![Scripted::ok(common::sample_products(10))]);
    let mut list = ListController::new(source);
    list.load().unwrap();

    let cards = list.cards();
    assert_eq!(cards.len(), 7);
    assert_eq!(cards[0].key, "1");
    assert_eq!(cards[0].price_label, "$11.50");
}

#[test]
fn open_hands_over_the_same_record() {
    let products = common::sample_products(10);
    let source = ScriptedCatalog::with_responses(vec![Scripted::ok(products.clone())]);
    let mut list = ListController::new(source);
    list.load().unwrap();

    match list.open(2).unwrap() {
        Route::ProductDetail { product } => assert_eq!(product, products[2]),
        other => panic!("unexpected route {:?}", other),
    }
}

#[test]
fn refresh_with_same_rendered_length_still_reveals() {
    let source = ScriptedCatalog::with_responses(vec![
        Scripted::ok(common::sample_products(7)),
        Scripted::ok(common::sample_products(20)),
    ]);
    let mut list = ListController::new(source);
    list.load().unwrap();

    let near_end = ScrollMetrics {
        offset: 610.0,
        viewport_len: 100.0,
        content_len: 700.0,
    };
    assert!(!list.on_scroll(near_end));

    list.refresh().unwrap();
    assert!(list.has_more());

    assert!(list.on_scroll(near_end));
    assert_eq!(list.state().visible_count(), 17);
}

#[test]
fn scroll_away_and_back_reveals_again() {
    let source = ScriptedCatalog::with_responses(vec![Scripted::ok(common::sample_products(30))]);
    let mut list = ListController::new(source);
    list.load().unwrap();

    let near_end = ScrollMetrics {
        offset: 610.0,
        viewport_len: 100.0,
        content_len: 700.0,
    };
    let far = ScrollMetrics {
        offset: 0.0,
        ..near_end
    };
    assert!(list.on_scroll(near_end));
    assert!(!list.on_scroll(far));
    // Same content length as before, but the trigger was re-armed.
    assert!(list.on_scroll(near_end));
    assert_eq!(list.state().visible_count(), 27);
}

#[test]
fn scroll_with_nothing_hidden_reports_no_reveal() {
    let source = ScriptedCatalog::with_responses(vec![Scripted::ok(common::sample_products(3))]);
    let mut list = ListController::new(source);
    list.load().unwrap();

    let near_end = ScrollMetrics {
        offset: 610.0,
        viewport_len: 100.0,
        content_len: 700.0,
    };
    assert!(!list.on_scroll(near_end));
    assert_eq!(list.visible_prefix().len(), 3);
}

#[test]
fn failed_refresh_before_load_reports_failed_phase() {
    let source = ScriptedCatalog::with_responses(vec![Scripted::fail()]);
    let mut list = ListController::new(source);

    assert!(list.refresh().is_err());
    assert!(!list.state().is_refreshing());
    assert!(matches!(list.state().phase(), ListPhase::Failed { .. }));
}
