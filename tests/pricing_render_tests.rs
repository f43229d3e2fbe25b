mod common;

use gvp::error::PricingError;
use gvp::pricing::render::{render_cards, EMPTY_MESSAGE, ERROR_MESSAGE, LOADING_MESSAGE};
use gvp::pricing::{render_loading, render_outcome, CardVariant, PlanCard, PricingOutcome, PricingPlan, Traffic};

use common::{plan, THREE_PLANS};

fn parse(json: &str) -> Vec<PricingPlan> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_plan_parses_backend_record() {
    let plans = parse(
        r#"[{"name": "Basic", "monthly_price_toman": 100000, "cpu": 1, "ram_gb": 1, "ssd_gb": 10, "traffic_gb": 50, "popular": false}]"#,
    );
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].name, "Basic");
    assert_eq!(plans[0].traffic_gb, Traffic::Gigabytes(50.0));
    assert_eq!(plans[0].hourly_price_toman, None);
    assert!(!plans[0].popular);
}

#[test]
fn test_popular_defaults_to_false() {
    let plans = parse(r#"[{"name": "X", "monthly_price_toman": 1, "cpu": 1, "ram_gb": 1, "ssd_gb": 1, "traffic_gb": 1}]"#);
    assert!(!plans[0].popular);
}

#[test]
fn test_traffic_sentinel_and_text_values() {
    let t: Traffic = serde_json::from_str(r#""نامحدود""#).unwrap();
    assert!(t.is_unlimited());
    let t: Traffic = serde_json::from_str(r#""Unlimited""#).unwrap();
    assert!(t.is_unlimited());
    let t: Traffic = serde_json::from_str(r#""1 TB""#).unwrap();
    assert_eq!(t, Traffic::Other("1 TB".to_string()));
}

#[test]
fn test_traffic_text_is_kept_verbatim() {
    let t: Traffic = serde_json::from_str(r#""050""#).unwrap();
    assert_eq!(t, Traffic::Other("050".to_string()));
    let t: Traffic = serde_json::from_str(r#""1e3""#).unwrap();
    assert_eq!(t, Traffic::Other("1e3".to_string()));
    let t: Traffic = serde_json::from_str(r#"" نامحدود""#).unwrap();
    assert!(!t.is_unlimited());

    let mut p = plan("Basic", 100000.0);
    p.traffic_gb = Traffic::Other("050".to_string());
    let html = render_outcome(&PricingOutcome::Loaded(vec![p]), CardVariant::Classic).unwrap();
    assert!(html.contains("ترافیک 050 گیگابایت"));
}

#[test]
fn test_null_popular_renders_plain_card() {
    let plans = parse(
        r#"[{"name": "Basic", "monthly_price_toman": 100000, "cpu": 1, "ram_gb": 1, "ssd_gb": 10, "traffic_gb": 50, "popular": null}]"#,
    );
    assert!(!plans[0].popular);

    let html = render_outcome(&PricingOutcome::Loaded(plans), CardVariant::Classic).unwrap();
    assert!(html.contains("class=\"pricing-card lazy-load\""));
}

#[test]
fn test_basic_plan_renders_single_classic_card() {
    let outcome = PricingOutcome::Loaded(vec![plan("Basic", 100000.0)]);
    let html = render_outcome(&outcome, CardVariant::Classic).unwrap();

    assert_eq!(html.matches("class=\"pricing-card").count(), 1);
    assert!(html.contains("<h3 class=\"pricing-name\">Basic</h3>"));
    assert!(html.contains("100,000 <span>تومان/ماه</span>"));
    assert!(html.contains("class=\"pricing-card lazy-load\""));
    assert!(!html.contains("popular"));
    assert!(html.contains("1 هسته پردازنده"));
    assert!(html.contains("10 گیگابایت فضای SSD"));
    assert!(html.contains("ترافیک 50 گیگابایت"));
    assert!(html.contains("خرید پلن"));
    assert!(!html.contains("provider-logo"));
}

#[test]
fn test_unlimited_traffic_renders_as_sentinel() {
    let mut p = plan("Pro", 250000.0);
    p.traffic_gb = Traffic::Unlimited;
    let html = render_outcome(&PricingOutcome::Loaded(vec![p]), CardVariant::Classic).unwrap();

    assert!(html.contains("ترافیک نامحدود</li>"));
    assert!(!html.contains("نامحدود گیگابایت"));
}

#[test]
fn test_card_count_and_order_match_input() {
    let plans = parse(THREE_PLANS);
    let html = render_outcome(&PricingOutcome::Loaded(plans.clone()), CardVariant::Classic).unwrap();

    assert_eq!(html.matches("class=\"pricing-card").count(), plans.len());
    let positions: Vec<usize> = plans
        .iter()
        .map(|p| html.find(&format!(">{}</h3>", p.name)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_popular_plan_is_marked() {
    let plans = parse(THREE_PLANS);
    let html = render_outcome(&PricingOutcome::Loaded(plans), CardVariant::Classic).unwrap();

    assert_eq!(html.matches("class=\"pricing-card popular lazy-load\"").count(), 1);
}

#[test]
fn test_empty_outcome_shows_no_plan_message() {
    let html = render_outcome(&PricingOutcome::Empty, CardVariant::Classic).unwrap();
    assert!(html.contains(EMPTY_MESSAGE));
    assert!(!html.contains("pricing-card"));
}

#[test]
fn test_failed_outcome_shows_error_message() {
    let outcome = PricingOutcome::Failed(PricingError::Status(500));
    let html = render_outcome(&outcome, CardVariant::Provider).unwrap();
    assert!(html.contains(ERROR_MESSAGE));
    assert!(!html.contains("pricing-card"));
}

#[test]
fn test_loading_message() {
    let html = render_loading().unwrap();
    assert!(html.contains(LOADING_MESSAGE));
}

#[test]
fn test_provider_variant_shows_logo_and_daily_price() {
    let mut p = plan("Hetzner-CX11", 100000.0);
    p.provider = Some("Hetzner".to_string());
    p.hourly_price_toman = Some(150.0);
    let html = render_outcome(&PricingOutcome::Loaded(vec![p]), CardVariant::Provider).unwrap();

    assert!(html.contains("provider-logo"));
    assert!(html.contains("hetzner.png"));
    assert!(html.contains("alt=\"Hetzner\""));
    assert!(html.contains("3,600 <span>تومان/روز</span>"));
    assert!(html.contains("100,000 تومان/ماه"));
}

#[test]
fn test_provider_variant_without_provider_or_hourly_price() {
    let html = render_outcome(&PricingOutcome::Loaded(vec![plan("Basic", 100000.0)]), CardVariant::Provider).unwrap();

    assert!(!html.contains("provider-logo"));
    assert!(!html.contains("تومان/روز"));
    assert!(html.contains("100,000 <span>تومان/ماه</span>"));
}

#[test]
fn test_plan_names_are_escaped() {
    let cards = vec![PlanCard::from(&plan("<b>Evil</b>", 1.0))];
    let html = render_cards(&cards, CardVariant::Classic).unwrap();
    assert!(!html.contains("<b>Evil</b>"));
}

#[test]
fn test_card_variant_parsing() {
    assert_eq!("classic".parse::<CardVariant>().unwrap(), CardVariant::Classic);
    assert_eq!(" PROVIDER ".parse::<CardVariant>().unwrap(), CardVariant::Provider);
    assert!("minimal".parse::<CardVariant>().is_err());
    assert_eq!(CardVariant::Provider.to_string(), "provider");
}
