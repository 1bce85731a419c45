use premium_protocol::features::NO_EXPLANATION;
use premium_protocol::*;

#[test]
fn test_known_features_have_explanations() {
    for name in ["age", "bmi", "children", "smoker"] {
        assert_ne!(explanation_for(name), NO_EXPLANATION, "{name} should be explained");
    }
}

#[test]
fn test_unknown_feature_falls_back() {
    assert_eq!(explanation_for("region"), NO_EXPLANATION);
}

#[test]
fn test_breakdown_splits_annual_cost() {
    let result = PredictionResult { predicted_insurance_cost: 4800.0 };
    let breakdown = PremiumBreakdown::from(&result);
    assert_eq!(breakdown.annual, 4800.0);
    assert_eq!(breakdown.monthly, 400.0);
    assert_eq!(breakdown.quarterly, 1200.0);
}

#[test]
fn test_explain_response_parses() {
    let body = r#"{"contributions": {"age": -120, "bmi": -80, "children": 0, "smoker": -1500}}"#;
    let parsed: ExplainResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.contributions.len(), 4);
    assert_eq!(parsed.contributions.get("smoker"), Some(-1500.0));
}

#[test]
fn test_form_field_parse() {
    assert_eq!("bmi".parse::<FormField>().unwrap(), FormField::Bmi);
    assert!("height".parse::<FormField>().is_err());
}
