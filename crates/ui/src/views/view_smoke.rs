use std::sync::Arc;

use campaign_core::model::{
    Adjustment, CampaignId, CampaignOverview, Donation, DonationId, Donor, Person, PersonId,
};
use campaign_core::{LoadState, PromoVariant};

use super::test_harness::{SourceReply, ViewKind, loaded, render_panel, setup_view_harness};
use crate::vm::map_dashboard;

fn donor(id: &str, first: &str, last: &str, pledge: f64, cents: &[i64], adjustments: &[f64]) -> Donor {
    Donor {
        person: Person {
            id: PersonId::new(id),
            first_name: first.into(),
            last_name: last.into(),
        },
        pledge,
        donations: cents
            .iter()
            .enumerate()
            .map(|(i, amount_in_cents)| Donation {
                id: DonationId::new(format!("{id}_don_{i}")),
                amount_in_cents: *amount_in_cents,
            })
            .collect(),
        adjustments: adjustments
            .iter()
            .map(|amount| Adjustment {
                name: "Fish Fry".into(),
                slug: "fish-fry".into(),
                amount: *amount,
            })
            .collect(),
    }
}

fn overview(donors: Vec<Donor>) -> CampaignOverview {
    CampaignOverview {
        id: CampaignId::new("cmp_a603ffe4a07e"),
        title: "Chapter Giving".into(),
        slug: "chapter-giving".into(),
        kind: "standard".into(),
        url: "https://example.org/chapter-giving".into(),
        status: "published".into(),
        permalink: "chapter-giving".into(),
        description: None,
        content: None,
        created: 1_700_000_000,
        updated: 1_700_000_000,
        start_date: None,
        end_date: None,
        goal_in_cents: 100_000,
        amount_raised_in_cents: 50_000,
        percent_funded: 50.0,
        donors,
    }
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("missing {needle} in {html}"))
}

//
// ─── PURE PANEL ───────────────────────────────────────────────────────────────
//

#[test]
fn loading_shows_only_busy_indicator() {
    let html = render_panel(LoadState::Loading);
    assert!(html.contains("spinner"), "missing spinner in {html}");
    assert!(!html.contains("Campaign Progress"), "unexpected content in {html}");
    assert!(!html.contains("Error:"), "unexpected error in {html}");
}

#[test]
fn failure_renders_error_and_no_campaign() {
    let html = render_panel(LoadState::Failed("HTTP error! status: 500".into()));
    assert!(
        html.contains("Error: HTTP error! status: 500"),
        "missing error in {html}"
    );
    assert!(!html.contains("Campaign Progress"), "unexpected content in {html}");
    assert!(!html.contains("spinner"), "unexpected spinner in {html}");
}

#[test]
fn null_payload_renders_no_campaign_info() {
    let html = render_panel(LoadState::Loaded(None));
    assert!(html.contains("No Campaign Info"), "missing fallback in {html}");
}

#[test]
fn empty_donor_list_renders_summary_and_empty_section() {
    let html = render_panel(LoadState::Loaded(Some(map_dashboard(&overview(vec![])))));
    assert!(html.contains("Campaign Progress"), "missing title in {html}");
    assert!(
        html.contains("Total Raised: $500.00 / $1000.00"),
        "missing totals in {html}"
    );
    assert!(html.contains("50%"), "missing percent in {html}");
    assert!(html.contains("Donor Progress"), "missing donor heading in {html}");
    assert!(html.contains("donor-list"), "missing donor container in {html}");
    assert!(!html.contains("donor-card"), "unexpected donor card in {html}");
}

#[test]
fn donor_cards_render_in_snapshot_order_with_goal_state() {
    let snapshot = overview(vec![
        donor("per_3", "Cal", "Third", 100.0, &[3_000], &[20.0]),
        donor("per_1", "Ann", "First", 100.0, &[10_000], &[]),
        donor("per_2", "Bo", "Second", 100.0, &[10_000], &[50.0]),
    ]);
    let html = render_panel(LoadState::Loaded(Some(map_dashboard(&snapshot))));

    let cal = position(&html, "Cal Third");
    let ann = position(&html, "Ann First");
    let bo = position(&html, "Bo Second");
    assert!(cal < ann && ann < bo, "donors out of order in {html}");

    assert!(html.contains("$50.00 / $100.00"), "missing partial total in {html}");
    assert!(html.contains("$100.00 / $100.00"), "missing exact total in {html}");
    assert!(html.contains("$150.00 / $100.00"), "missing overshoot total in {html}");

    assert_eq!(html.matches("Goal Met").count(), 2, "badge count in {html}");
    assert_eq!(html.matches("goal-met").count(), 2, "emphasis count in {html}");
    assert!(
        html.contains("2 of 3 donors met their pledge"),
        "missing goals summary in {html}"
    );

    // The badge sits after the met donors' names, never after the partial one.
    let first_badge = position(&html, "Goal Met");
    assert!(first_badge > ann, "badge attached to unmet donor in {html}");
}

#[test]
fn progress_bar_gets_unrounded_value() {
    let snapshot = overview(vec![donor("per_9", "Di", "Third", 3.0, &[100], &[])]);
    let html = render_panel(LoadState::Loaded(Some(map_dashboard(&snapshot))));
    assert!(html.contains("33%"), "missing rounded label in {html}");
    assert!(html.contains("width: 33.3"), "missing unrounded width in {html}");
}

//
// ─── FETCH-DRIVEN VIEW ────────────────────────────────────────────────────────
//

#[tokio::test(flavor = "current_thread")]
async fn progress_view_starts_loading_and_fetches_once() {
    let mut harness = setup_view_harness(
        ViewKind::DonorProgress,
        SourceReply::Never,
        PromoVariant::LandingPage,
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("spinner"), "missing spinner in {html}");
    assert_eq!(harness.source.calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn unmounting_progress_view_drops_pending_fetch() {
    let mut harness = setup_view_harness(
        ViewKind::DonorProgress,
        SourceReply::Never,
        PromoVariant::LandingPage,
    );
    harness.rebuild();
    harness.settle().await;

    assert_eq!(harness.source.calls(), 1);
    assert!(!harness.source.abandoned(), "request dropped while mounted");

    let source = Arc::clone(&harness.source);
    drop(harness);

    assert!(source.abandoned(), "request outlived the view");
    assert_eq!(source.calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_renders_loaded_snapshot() {
    let snapshot = overview(vec![donor("per_1", "Ann", "First", 100.0, &[10_000], &[])]);
    let mut harness = setup_view_harness(
        ViewKind::DonorProgress,
        loaded(snapshot),
        PromoVariant::LandingPage,
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Campaign Progress"), "missing title in {html}");
    assert!(html.contains("Ann First"), "missing donor in {html}");
    assert!(html.contains("Goal Met"), "missing badge in {html}");
    assert!(!html.contains("spinner"), "still loading in {html}");
    assert_eq!(harness.source.calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_renders_http_failure() {
    let mut harness = setup_view_harness(
        ViewKind::DonorProgress,
        SourceReply::Status(500),
        PromoVariant::LandingPage,
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Error: HTTP error! status: 500"),
        "missing error in {html}"
    );
    assert!(!html.contains("Campaign Progress"), "unexpected content in {html}");
}

//
// ─── PROMOTION ────────────────────────────────────────────────────────────────
//

#[test]
fn landing_variant_embeds_iframe() {
    let mut harness = setup_view_harness(
        ViewKind::Promotion,
        SourceReply::Never,
        PromoVariant::LandingPage,
    );
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("<iframe"), "missing iframe in {html}");
    assert!(html.contains("Campaign Landing Page"), "missing title in {html}");
    assert!(html.contains("campaigns.donately.com"), "missing url in {html}");
    assert!(!html.contains("Donate Now"), "both variants active in {html}");
    assert_eq!(harness.source.calls(), 0);
}

#[test]
fn donate_variant_renders_new_tab_link() {
    let mut harness = setup_view_harness(
        ViewKind::Promotion,
        SourceReply::Never,
        PromoVariant::DonateButton,
    );
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Donate Now"), "missing call to action in {html}");
    assert!(html.contains("target=\"_blank\""), "missing target in {html}");
    assert!(html.contains("noopener noreferrer"), "missing rel in {html}");
    assert!(!html.contains("<iframe"), "both variants active in {html}");
    assert!(harness.opener.opened.lock().map(|o| o.is_empty()).unwrap_or(false));
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_shows_promotion_while_progress_loads() {
    let mut harness = setup_view_harness(
        ViewKind::Dashboard,
        SourceReply::Never,
        PromoVariant::DonateButton,
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    let promo = position(&html, "Donate Now");
    let spinner = position(&html, "spinner");
    assert!(promo < spinner, "promotion should render above progress in {html}");
}
