use super::*;
use access::Role;

#[test]
fn auth_state_default_has_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn auth_state_holds_session_identity() {
    let state = AuthState {
        user: Some(SessionUser { name: "Dana".into(), role: Role::Admin }),
        loading: false,
    };
    let user = state.user.expect("user");
    assert_eq!(user.name, "Dana");
    assert_eq!(user.role.dashboard_path(), "/admin/dashboard");
}
