//! Integration tests for the login and session flow.

mod helpers;

use shopdesk_auth::AuthError;
use shopdesk_client::{ClientError, LikelyCause};

#[tokio::test]
async fn test_login_persists_across_instances() {
    let app = helpers::TestApp::new().await;
    app.mock_users().await;

    let result = app.gate().login("admin@TIENDA.com", "admin123").await.unwrap();
    assert_eq!(result.session.subject_id, 1);

    let later = app.gate();
    assert!(later.is_authorized().await);
    let identity = later.sessions().current().await.unwrap();
    assert_eq!(identity.display_name(), "Admin Tienda");
    assert!(later.require_authorization().await);
    assert_eq!(app.navigator.redirects(), 0);
}

#[tokio::test]
async fn test_login_failures_in_order() {
    let app = helpers::TestApp::new().await;
    app.mock_users().await;
    let gate = app.gate();

    assert!(matches!(
        gate.authenticate("nadie@tienda.com", "x").await,
        Err(AuthError::NotFound)
    ));
    assert!(matches!(
        gate.authenticate("admin@tienda.com", "wrong").await,
        Err(AuthError::InvalidCredential)
    ));
    assert!(matches!(
        gate.authenticate("carla@correo.com", "carla123").await,
        Err(AuthError::InsufficientRole)
    ));
    assert!(matches!(
        gate.authenticate("viejo@tienda.com", "viejo123").await,
        Err(AuthError::AccountInactive)
    ));
    assert!(!gate.is_authorized().await);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let app = helpers::TestApp::new().await;
    app.mock_users().await;
    let gate = app.gate();
    gate.login("admin@tienda.com", "admin123").await.unwrap();

    gate.logout().await.unwrap();
    assert!(gate.sessions().current().await.is_none());
    assert!(!app.gate().is_authorized().await);
    assert_eq!(app.navigator.redirects(), 1);
}

#[tokio::test]
async fn test_server_error_during_login_is_remote_failure() {
    let app = helpers::TestApp::new().await;
    app.mock_status("/api/usuarios", 500).await;

    let err = app
        .gate()
        .authenticate("admin@tienda.com", "admin123")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AuthError::Remote(ClientError::RemoteRequestFailed { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_unreachable_api_is_connectivity() {
    let mut app = helpers::TestApp::new().await;
    app.config.api.base_url = "http://127.0.0.1:9".to_string();
    app.client = std::sync::Arc::new(shopdesk_client::ResourceClient::new(&app.config.api).unwrap());

    let err = app
        .gate()
        .authenticate("admin@tienda.com", "admin123")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AuthError::Remote(ClientError::Connectivity {
            likely_cause: LikelyCause::ServerUnavailable,
            ..
        })
    ));
}

#[tokio::test]
async fn test_remote_deactivation_revokes_session() {
    let app = helpers::TestApp::new().await;
    app.mock_users().await;
    app.gate().login("admin@tienda.com", "admin123").await.unwrap();

    app.server.reset().await;
    app.mock_get(
        "/api/usuarios/1",
        serde_json::json!({
            "id_usuario": 1, "correo": "admin@tienda.com",
            "rol": "administrador", "estado": "inactivo"
        }),
    )
    .await;

    let gate = app.gate();
    assert!(!gate.require_authorization().await);
    assert_eq!(app.navigator.redirects(), 1);
    assert!(!gate.is_authorized().await);
}

#[tokio::test]
async fn test_tampered_snapshot_role_is_evicted() {
    let app = helpers::TestApp::new().await;
    app.mock_users().await;
    let gate = app.gate();
    let result = gate.login("admin@tienda.com", "admin123").await.unwrap();

    let mut identity = result.identity;
    identity.role = shopdesk_entity::UserRole::Customer;
    gate.sessions().save(&result.session, &identity).await.unwrap();

    assert!(!gate.is_authorized().await);
    assert!(gate.sessions().credential().await.is_none());
}
