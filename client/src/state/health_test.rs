use super::*;

fn status(agents_initialized: bool) -> HealthStatus {
    HealthStatus { agents_initialized, extra: serde_json::Map::new() }
}

#[test]
fn default_is_unknown_without_banner() {
    let state = HealthState::default();
    assert_eq!(state, HealthState::Unknown);
    assert!(!state.banner_visible());
}

#[test]
fn uninitialized_agents_show_banner() {
    let state = HealthState::from_result(Ok(status(false)));
    assert!(state.banner_visible());
}

#[test]
fn initialized_agents_hide_banner() {
    let state = HealthState::from_result(Ok(status(true)));
    assert!(!state.banner_visible());
}

#[test]
fn failed_check_is_unknown_without_banner() {
    for err in [ApiError::Network("refused".to_owned()), ApiError::Status(500), ApiError::Decode("x".to_owned())] {
        let state = HealthState::from_result(Err(err));
        assert_eq!(state, HealthState::Unknown);
        assert!(!state.banner_visible());
    }
}
