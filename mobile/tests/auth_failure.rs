//! # Auth-Failure Redirect Tests
//!
//! The controller's reaction to credential rejections reported by the HTTP
//! layer through the interceptor.

mod common;

use common::{mounted_app, LogoutOutcome, MockOtp, RecordingAuth};
use mobile::app::{AuthFailurePhase, TicketSelection};
use mobile::services::{AuthFailureHandler, AuthFailureInterceptor};
use mobile::{AppEvent, Page};
use std::sync::Arc;

#[tokio::test]
async fn test_logout_completes_before_login_redirect() {
    // Arrange
    let auth = Arc::new(RecordingAuth::gated());
    let interceptor = AuthFailureInterceptor::new();
    let app = mounted_app(auth.clone(), Arc::new(MockOtp::new(5)), &interceptor);
    app.go_board();

    // Act
    let notifier = interceptor.clone();
    let failure = tokio::spawn(async move { notifier.notify(true).await });
    auth.wait_logout_started().await;

    // Assert: logout is pending, page has not moved yet
    assert_eq!(app.current_page(), Page::Board);
    assert_eq!(
        app.auth_failure_phase(),
        AuthFailurePhase::LogoutInFlight {
            redirect_to_login: true
        }
    );

    auth.release_logout();
    failure.await.expect("notify task should finish");

    assert_eq!(auth.effects(), vec!["logout:start", "logout:done"]);
    assert_eq!(app.current_page(), Page::Login);
    assert_eq!(
        app.auth_failure_phase(),
        AuthFailurePhase::Redirected { target: Page::Login }
    );
    assert!(app
        .drain_events()
        .contains(&AppEvent::AuthRedirect { target: Page::Login }));
}

#[tokio::test]
async fn test_anonymous_failure_goes_home_without_logout() {
    // Arrange
    let auth = Arc::new(RecordingAuth::anonymous());
    let interceptor = AuthFailureInterceptor::new();
    let app = mounted_app(auth.clone(), Arc::new(MockOtp::new(5)), &interceptor);
    app.go_speakers();

    // Act
    interceptor.notify(false).await;

    // Assert
    assert_eq!(auth.logout_calls(), 0);
    assert_eq!(app.current_page(), Page::Home);
}

#[tokio::test]
async fn test_redirect_follows_flag_not_live_auth_state() {
    // Authenticated session, but the HTTP layer decided on Home
    let auth = Arc::new(RecordingAuth::authenticated());
    let interceptor = AuthFailureInterceptor::new();
    let app = mounted_app(auth.clone(), Arc::new(MockOtp::new(5)), &interceptor);
    app.go_profile();

    interceptor.notify(false).await;

    assert_eq!(auth.logout_calls(), 1);
    assert_eq!(app.current_page(), Page::Home);
}

#[tokio::test]
async fn test_stale_handler_after_unmount_is_inert() {
    // Arrange
    let auth = Arc::new(RecordingAuth::authenticated());
    let interceptor = AuthFailureInterceptor::new();
    let mut app = mounted_app(auth.clone(), Arc::new(MockOtp::new(5)), &interceptor);
    let stale = app
        .auth_failure_handler()
        .expect("mounted controller should expose its handler");

    // Act
    app.unmount();
    app.go_news();
    stale.on_auth_failure(true).await;
    interceptor.notify(true).await;

    // Assert
    assert!(!interceptor.is_registered());
    assert_eq!(app.current_page(), Page::News);
    assert_eq!(app.auth_failure_phase(), AuthFailurePhase::Idle);
    assert_eq!(auth.logout_calls(), 0);
}

#[tokio::test]
async fn test_unmount_during_logout_skips_redirect() {
    let auth = Arc::new(RecordingAuth::gated());
    let interceptor = AuthFailureInterceptor::new();
    let mut app = mounted_app(auth.clone(), Arc::new(MockOtp::new(5)), &interceptor);
    app.go_events();

    let notifier = interceptor.clone();
    let failure = tokio::spawn(async move { notifier.notify(true).await });
    auth.wait_logout_started().await;

    app.unmount();
    auth.release_logout();
    failure.await.expect("notify task should finish");

    assert_eq!(app.current_page(), Page::Events);
    assert_eq!(app.auth_failure_phase(), AuthFailurePhase::Idle);

    // A remounted controller reacts to the next failure
    app.mount();
    app.go_board();
    interceptor.notify(false).await;

    assert_eq!(app.current_page(), Page::Home);
    assert_eq!(
        app.auth_failure_phase(),
        AuthFailurePhase::Redirected { target: Page::Home }
    );
}

#[tokio::test]
async fn test_remount_while_old_logout_pending() {
    // Arrange
    let auth = Arc::new(RecordingAuth::gated());
    let interceptor = AuthFailureInterceptor::new();
    let mut app = mounted_app(auth.clone(), Arc::new(MockOtp::new(5)), &interceptor);

    let notifier = interceptor.clone();
    let stale = tokio::spawn(async move { notifier.notify(true).await });
    auth.wait_logout_started().await;

    // Act: remount before the first logout settles, then fail again
    app.unmount();
    app.mount();
    assert_eq!(app.auth_failure_phase(), AuthFailurePhase::Idle);
    app.go_board();

    let notifier = interceptor.clone();
    let fresh = tokio::spawn(async move { notifier.notify(false).await });
    auth.wait_logout_started().await;

    auth.release_logout();
    auth.release_logout();
    stale.await.expect("stale notify task should finish");
    fresh.await.expect("fresh notify task should finish");

    // Assert: the old handler neither redirected nor cleared the new claim
    assert_eq!(auth.logout_calls(), 2);
    assert_eq!(app.current_page(), Page::Home);
    assert_eq!(
        app.auth_failure_phase(),
        AuthFailurePhase::Redirected { target: Page::Home }
    );
}

#[tokio::test]
async fn test_cancelled_failure_does_not_block_later_failures() {
    // Arrange
    let auth = Arc::new(RecordingAuth::gated());
    let interceptor = AuthFailureInterceptor::new();
    let app = mounted_app(auth.clone(), Arc::new(MockOtp::new(5)), &interceptor);
    app.go_board();

    let notifier = interceptor.clone();
    let failure = tokio::spawn(async move { notifier.notify(true).await });
    auth.wait_logout_started().await;

    // Act: the request future driving the handler is dropped mid-logout
    failure.abort();
    let joined = failure.await;
    assert!(joined.is_err_and(|e| e.is_cancelled()));

    // Assert: the abandoned failure no longer counts as pending
    assert_eq!(app.current_page(), Page::Board);
    assert_eq!(app.auth_failure_phase(), AuthFailurePhase::Idle);

    auth.release_logout();
    interceptor.notify(false).await;

    assert_eq!(auth.logout_calls(), 2);
    assert_eq!(app.current_page(), Page::Home);
    assert_eq!(
        app.auth_failure_phase(),
        AuthFailurePhase::Redirected { target: Page::Home }
    );
}

#[tokio::test]
async fn test_duplicate_failure_is_coalesced() {
    // Arrange
    let auth = Arc::new(RecordingAuth::gated());
    let interceptor = AuthFailureInterceptor::new();
    let app = mounted_app(auth.clone(), Arc::new(MockOtp::new(5)), &interceptor);

    let notifier = interceptor.clone();
    let first = tokio::spawn(async move { notifier.notify(true).await });
    auth.wait_logout_started().await;

    // Act: a second rejection lands while the first is logging out
    interceptor.notify(false).await;
    auth.release_logout();
    first.await.expect("notify task should finish");

    // Assert: one logout, redirect decided by the first failure
    assert_eq!(auth.logout_calls(), 1);
    assert_eq!(app.current_page(), Page::Login);
    let redirects = app
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, AppEvent::AuthRedirect { .. }))
        .count();
    assert_eq!(redirects, 1);
}

#[tokio::test]
async fn test_failure_after_redirect_is_handled_again() {
    let auth = Arc::new(RecordingAuth::anonymous());
    let interceptor = AuthFailureInterceptor::new();
    let app = mounted_app(auth, Arc::new(MockOtp::new(5)), &interceptor);

    interceptor.notify(true).await;
    assert_eq!(app.current_page(), Page::Login);

    app.go_board();
    interceptor.notify(false).await;
    assert_eq!(app.current_page(), Page::Home);
    assert_eq!(
        app.auth_failure_phase(),
        AuthFailurePhase::Redirected { target: Page::Home }
    );
}

#[tokio::test]
async fn test_failed_logout_still_redirects() {
    let auth = Arc::new(RecordingAuth::authenticated().with_outcome(LogoutOutcome::Fail));
    let interceptor = AuthFailureInterceptor::new();
    let app = mounted_app(auth.clone(), Arc::new(MockOtp::new(5)), &interceptor);

    interceptor.notify(true).await;

    assert_eq!(auth.effects(), vec!["logout:start", "logout:failed"]);
    assert_eq!(app.current_page(), Page::Login);
}

#[tokio::test]
async fn test_panicking_logout_still_redirects() {
    let auth = Arc::new(RecordingAuth::authenticated().with_outcome(LogoutOutcome::Panic));
    let interceptor = AuthFailureInterceptor::new();
    let app = mounted_app(auth.clone(), Arc::new(MockOtp::new(5)), &interceptor);

    interceptor.notify(true).await;

    assert_eq!(auth.logout_calls(), 1);
    assert_eq!(app.current_page(), Page::Login);
}

#[tokio::test]
async fn test_transition_during_logout_is_not_split() {
    // Arrange
    let auth = Arc::new(RecordingAuth::gated());
    let interceptor = AuthFailureInterceptor::new();
    let app = mounted_app(auth.clone(), Arc::new(MockOtp::new(5)), &interceptor);

    let notifier = interceptor.clone();
    let failure = tokio::spawn(async move { notifier.notify(false).await });
    auth.wait_logout_started().await;

    // Act: the user navigates while logout is pending
    app.go_conference_form(TicketSelection {
        category_name: Some("Student".to_string()),
        ..Default::default()
    });
    {
        let state = app.read();
        assert_eq!(state.current_page(), Page::ConferenceForm);
        assert!(state.selections().ticket().is_some());
    }

    auth.release_logout();
    failure.await.expect("notify task should finish");

    // Assert: the redirect wins, the slot written by the full transition stays
    let state = app.snapshot();
    assert_eq!(state.current_page(), Page::Home);
    assert_eq!(
        state.selections().ticket().and_then(|t| t.category_name.as_deref()),
        Some("Student")
    );
}

#[tokio::test]
async fn test_user_logout_ends_on_login_even_when_logout_fails() {
    let auth = Arc::new(RecordingAuth::authenticated().with_outcome(LogoutOutcome::Fail));
    let interceptor = AuthFailureInterceptor::new();
    let app = mounted_app(auth.clone(), Arc::new(MockOtp::new(5)), &interceptor);
    app.go_membership_card();

    app.handle_logout().await;

    assert_eq!(auth.logout_calls(), 1);
    assert_eq!(app.current_page(), Page::Login);
    assert!(app.drain_events().contains(&AppEvent::LoggedOut));
}

#[tokio::test]
async fn test_fire_from_sync_context() {
    let auth = Arc::new(RecordingAuth::anonymous());
    let interceptor = AuthFailureInterceptor::new();
    let app = mounted_app(auth, Arc::new(MockOtp::new(5)), &interceptor);
    app.go_gallery();

    interceptor
        .fire(false)
        .await
        .expect("background notify should finish");

    assert_eq!(app.current_page(), Page::Home);
}
