use premium_protocol::{ContributionMap, PredictionResult};
use premium_state::*;

fn estimate(cost: f64) -> Estimate {
    let contributions: ContributionMap =
        [("age", -120.0), ("bmi", -80.0), ("children", 0.0), ("smoker", -1500.0)]
            .into_iter()
            .collect();
    Estimate::new(PredictionResult { predicted_insurance_cost: cost }, contributions).unwrap()
}

#[test]
fn test_starts_idle_and_enabled() {
    let m = RequestStateMachine::new();
    assert_eq!(m.state(), RequestState::Idle);
    assert!(m.is_submit_enabled());
    assert!(!m.is_busy());
    assert!(m.estimate().is_none());
}

#[test]
fn test_submitting_disables_control() {
    let mut m = RequestStateMachine::new();
    assert_eq!(m.begin_submit().unwrap(), 1);
    assert_eq!(m.state(), RequestState::Submitting);
    assert!(!m.is_submit_enabled());
    assert!(m.is_busy());
}

#[test]
fn test_second_begin_rejected_while_submitting() {
    let mut m = RequestStateMachine::new();
    m.begin_submit().unwrap();
    assert_eq!(m.begin_submit(), Err(TransitionError::AlreadySubmitting));
    assert_eq!(m.attempts(), 1);
}

#[test]
fn test_success_stores_estimate() {
    let mut m = RequestStateMachine::new();
    m.begin_submit().unwrap();
    m.succeed(estimate(3200.55)).unwrap();
    assert_eq!(m.state(), RequestState::Success);
    let est = m.estimate().unwrap();
    assert_eq!(est.result.predicted_insurance_cost, 3200.55);
    assert_eq!(est.normalized.len(), 4);
    assert!(m.is_submit_enabled());
}

#[test]
fn test_failure_keeps_previous_estimate() {
    let mut m = RequestStateMachine::new();
    m.begin_submit().unwrap();
    m.succeed(estimate(1000.0)).unwrap();

    m.begin_submit().unwrap();
    m.fail("connection refused").unwrap();

    assert_eq!(m.state(), RequestState::Error);
    assert_eq!(m.estimate().unwrap().result.predicted_insurance_cost, 1000.0);
    assert_eq!(m.last_failure(), Some("connection refused"));
    assert!(m.is_submit_enabled());
}

#[test]
fn test_new_attempt_clears_failure() {
    let mut m = RequestStateMachine::new();
    m.begin_submit().unwrap();
    m.fail("HTTP 500").unwrap();

    m.begin_submit().unwrap();
    assert!(m.last_failure().is_none());
    m.succeed(estimate(2000.0)).unwrap();
    assert_eq!(m.state(), RequestState::Success);
    assert!(m.last_failure().is_none());
}

#[test]
fn test_success_replaces_estimate_wholesale() {
    let mut m = RequestStateMachine::new();
    m.begin_submit().unwrap();
    m.succeed(estimate(1000.0)).unwrap();
    m.begin_submit().unwrap();
    m.succeed(estimate(5000.0)).unwrap();
    assert_eq!(m.estimate().unwrap().result.predicted_insurance_cost, 5000.0);
    assert_eq!(m.estimate().unwrap().breakdown.monthly, 5000.0 / 12.0);
}

#[test]
fn test_complete_without_submitting_rejected() {
    let mut m = RequestStateMachine::new();
    assert!(matches!(
        m.succeed(estimate(1.0)),
        Err(TransitionError::NotSubmitting { state: RequestState::Idle, .. })
    ));
    assert!(m.fail("late").is_err());
    assert_eq!(m.state(), RequestState::Idle);
}

#[test]
fn test_details_toggle_requires_estimate() {
    let mut m = RequestStateMachine::new();
    assert!(!m.toggle_details());
    assert!(!m.show_details());

    m.begin_submit().unwrap();
    m.succeed(estimate(1.0)).unwrap();
    assert!(m.toggle_details());
    assert!(m.show_details());
    assert!(!m.toggle_details());
}

#[test]
fn test_estimate_requires_contributions() {
    let result = PredictionResult { predicted_insurance_cost: 1.0 };
    assert_eq!(
        Estimate::new(result, ContributionMap::new()).unwrap_err(),
        NormalizeError::Empty
    );
}
