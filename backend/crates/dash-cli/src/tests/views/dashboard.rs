use crate::tests::fake_backend::{FakeBackend, sample_user};
use crate::{DashboardView, EditMode, Notice};

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq, none, not, some};

async fn loaded_view(backend: &FakeBackend) -> DashboardView {
    let mut view = DashboardView::new();
    view.refresh(backend).await.unwrap();
    view
}

// =========================================================================
// Loading and rendering
// =========================================================================

#[test]
fn given_new_view_when_rendered_then_shows_loading() {
    let view = DashboardView::new();

    assert_that!(view.is_loading(), eq(true));
    assert_that!(view.render(), contains_substring("Loading"));
}

#[tokio::test]
async fn given_stats_without_name_when_rendered_then_shows_placeholders() {
    let mut user = sample_user();
    user.email = None;
    let backend = FakeBackend::signed_in(user);

    let view = loaded_view(&backend).await;
    let text = view.render();

    assert_that!(text, contains_substring("Email:        Not provided"));
    assert_that!(text, contains_substring("Name:         Not set"));
    assert_that!(text, contains_substring("Member Since: 2024-01-15"));
    assert_that!(text, contains_substring("Last Login:   2025-06-01 12:00:00 UTC"));
    assert_that!(text, contains_substring("[Edit Profile]"));
}

#[tokio::test]
async fn given_stats_with_email_when_rendered_then_shows_email() {
    let backend = FakeBackend::signed_in(sample_user());

    let view = loaded_view(&backend).await;

    assert_that!(view.render(), contains_substring("alice@example.com"));
}

#[tokio::test]
async fn given_failing_backend_when_refreshed_then_error_and_still_loading() {
    let backend = FakeBackend::signed_in(sample_user()).failing_stats();
    let mut view = DashboardView::new();

    let result = view.refresh(&backend).await;

    assert!(result.is_err());
    assert_that!(view.is_loading(), eq(true));
}

// =========================================================================
// Editing
// =========================================================================

#[test]
fn given_viewing_when_begin_edit_then_editing_with_empty_draft() {
    let mut view = DashboardView::new();

    view.begin_edit();

    assert_that!(
        view.mode(),
        eq(&EditMode::Editing {
            draft: String::new()
        })
    );
}

#[test]
fn given_editing_when_cancel_then_viewing_and_draft_discarded() {
    let mut view = DashboardView::new();
    view.begin_edit();
    view.set_draft("Half typed");

    view.cancel();
    view.begin_edit();

    assert_that!(
        view.mode(),
        eq(&EditMode::Editing {
            draft: String::new()
        })
    );
}

#[test]
fn given_viewing_when_set_draft_then_ignored() {
    let mut view = DashboardView::new();

    view.set_draft("Alice");

    assert_that!(view.mode(), eq(&EditMode::Viewing));
}

#[tokio::test]
async fn given_blank_draft_when_submit_then_error_notice_and_no_call() {
    let backend = FakeBackend::signed_in(sample_user());
    let mut view = loaded_view(&backend).await;
    view.begin_edit();
    view.set_draft("   ");

    view.submit(&backend).await;

    assert_that!(
        view.notice(),
        some(eq(&Notice::Error("Name cannot be empty".to_string())))
    );
    assert_that!(
        view.mode(),
        eq(&EditMode::Editing {
            draft: "   ".to_string()
        })
    );
    assert_that!(backend.update_calls().len(), eq(0));
}

#[tokio::test]
async fn given_padded_name_when_submit_then_trimmed_name_sent_and_viewing() {
    let backend = FakeBackend::signed_in(sample_user());
    let mut view = loaded_view(&backend).await;
    view.begin_edit();
    view.set_draft("  Alice  ");

    view.submit(&backend).await;

    assert_that!(backend.update_calls(), eq(&vec!["Alice".to_string()]));
    assert_that!(
        view.notice(),
        some(eq(&Notice::Success(
            "Profile updated successfully!".to_string()
        )))
    );
    assert_that!(view.mode(), eq(&EditMode::Viewing));
}

#[tokio::test]
async fn given_successful_submit_when_rendered_then_shows_refreshed_name() {
    let backend = FakeBackend::signed_in(sample_user());
    let mut view = loaded_view(&backend).await;
    view.begin_edit();
    view.set_draft("Alice");

    view.submit(&backend).await;

    let name = view.stats().and_then(|s| s.name.clone());
    assert_that!(name, some(eq("Alice")));
    assert_that!(view.render(), contains_substring("Name:         Alice"));
}

#[tokio::test]
async fn given_failing_backend_when_submit_then_error_notice_and_still_editing() {
    let backend = FakeBackend::signed_in(sample_user()).failing_updates();
    let mut view = loaded_view(&backend).await;
    view.begin_edit();
    view.set_draft("Alice");

    view.submit(&backend).await;

    assert_that!(
        view.notice(),
        some(eq(&Notice::Error("Failed to update profile".to_string())))
    );
    assert_that!(
        view.mode(),
        eq(&EditMode::Editing {
            draft: "Alice".to_string()
        })
    );
    assert_that!(view.render(), contains_substring("[Save Changes] [Cancel]"));
}

#[tokio::test]
async fn given_viewing_when_submit_then_nothing_happens() {
    let backend = FakeBackend::signed_in(sample_user());
    let mut view = loaded_view(&backend).await;

    view.submit(&backend).await;

    assert_that!(view.notice(), none());
    assert_that!(backend.update_calls().len(), eq(0));
    assert_that!(view.render(), not(contains_substring("[error]")));
}

#[tokio::test]
async fn given_no_stats_loaded_when_submit_then_no_call_and_failure_rendered() {
    let backend = FakeBackend::signed_out().failing_updates();
    let mut view = loaded_view(&backend).await;
    view.begin_edit();
    view.set_draft("Alice");

    view.submit(&backend).await;

    assert_that!(backend.update_calls().len(), eq(0));
    assert_that!(
        view.notice(),
        some(eq(&Notice::Error("Failed to update profile".to_string())))
    );
    let text = view.render();
    assert_that!(text, contains_substring("Loading profile..."));
    assert_that!(text, contains_substring("Failed to update profile"));
}

#[tokio::test]
async fn given_stats_fail_after_successful_update_when_submit_then_keeps_prior_stats() {
    let backend = FakeBackend::signed_in(sample_user());
    let mut view = loaded_view(&backend).await;
    view.begin_edit();
    view.set_draft("Alice");
    backend.set_stats_failing(true);

    view.submit(&backend).await;

    assert_that!(backend.update_calls(), eq(&vec!["Alice".to_string()]));
    assert_that!(
        view.notice(),
        some(eq(&Notice::Success(
            "Profile updated successfully!".to_string()
        )))
    );
    assert_that!(view.mode(), eq(&EditMode::Viewing));
    let name = view.stats().and_then(|s| s.name.clone());
    assert_that!(name, none());
    let text = view.render();
    assert_that!(text, contains_substring("Name:         Not set"));
    assert_that!(text, contains_substring("[ok] Profile updated successfully!"));
}
