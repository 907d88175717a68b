//! Tests for the two-phase removal flow and the empty-list refetch.

use std::sync::Arc;
use std::time::Duration;

use bubbletea_rs::{Cmd, Model};
use crossterm::event::{KeyCode, KeyModifiers};

use super::PopularMoviesApp;
use crate::catalog::models::test_support::numbered_movies;
use crate::tui::components::RemovalControl;
use crate::tui::messages::AppMsg;
use crate::tui::settings::WidgetSettings;
use crate::tui::test_support::{StubCatalogGateway, drive, resolve};

const JUST_BEFORE_DELAY: Duration = Duration::from_millis(499);

fn seeded_settings() -> WidgetSettings {
    WidgetSettings {
        seed: Some(11),
        ..WidgetSettings::default()
    }
}

async fn loaded_app(
    gateway: Arc<StubCatalogGateway>,
    settings: WidgetSettings,
) -> PopularMoviesApp {
    let mut app = PopularMoviesApp::new(gateway, settings);
    let msg = resolve(app.mount()).await.expect("mount fetch should settle");
    assert!(app.handle_message(&msg).is_none());
    app
}

fn visible_ids(app: &PopularMoviesApp) -> Vec<u64> {
    app.state()
        .movies()
        .iter()
        .map(|entry| entry.movie.id)
        .collect()
}

fn start_removal(app: &mut PopularMoviesApp, id: u64) -> Cmd {
    app.handle_message(&AppMsg::Remove(id))
        .expect("removal should arm a timer")
}

#[tokio::test(start_paused = true)]
async fn flagged_movie_stays_for_the_full_delay() {
    let gateway = Arc::new(StubCatalogGateway::with_page(numbered_movies(20)));
    let mut app = loaded_app(gateway, seeded_settings()).await;
    let ids = visible_ids(&app);
    let target = ids.first().copied().expect("a movie should be visible");

    let mut timer = start_removal(&mut app, target);
    let entry = app.state().entry(target).expect("movie should still be visible");
    assert!(entry.removing);

    assert!(
        tokio::time::timeout(JUST_BEFORE_DELAY, &mut timer)
            .await
            .is_err(),
        "timer must not fire before the delay"
    );
    assert!(app.state().entry(target).is_some());

    let msg = resolve(timer).await.expect("timer should fire");
    assert!(matches!(msg, AppMsg::RemovalElapsed(id) if id == target));
    assert!(app.handle_message(&msg).is_none());

    let remaining = visible_ids(&app);
    assert_eq!(remaining.len(), 4);
    assert!(!remaining.contains(&target));
    assert!(app.state().movies().iter().all(|entry| !entry.removing));
    assert_eq!(
        remaining,
        ids.into_iter().filter(|id| *id != target).collect::<Vec<_>>(),
        "other movies keep their order"
    );
}

#[tokio::test(start_paused = true)]
async fn removing_twice_arms_one_timer() {
    let gateway = Arc::new(StubCatalogGateway::with_page(numbered_movies(5)));
    let mut app = loaded_app(gateway, seeded_settings()).await;
    let target = visible_ids(&app).first().copied().expect("a movie should be visible");

    assert!(app.handle_message(&AppMsg::Remove(target)).is_some());
    assert!(app.handle_message(&AppMsg::Remove(target)).is_none());
    assert!(app.handle_message(&AppMsg::Remove(999)).is_none());
}

#[tokio::test(start_paused = true)]
async fn stale_timer_is_ignored() {
    let gateway = Arc::new(StubCatalogGateway::with_page(numbered_movies(5)));
    let mut app = loaded_app(gateway, seeded_settings()).await;
    let before = app.state().clone();
    let unflagged = visible_ids(&app).first().copied().expect("a movie should be visible");

    assert!(app.handle_message(&AppMsg::RemovalElapsed(999)).is_none());
    assert!(app.handle_message(&AppMsg::RemovalElapsed(unflagged)).is_none());

    assert_eq!(app.state(), &before);
}

#[tokio::test(start_paused = true)]
async fn end_to_end_removal_of_every_movie_fetches_next_page() {
    let gateway = Arc::new(
        StubCatalogGateway::with_page(numbered_movies(20)).then_page(numbered_movies(20)),
    );
    let mut app = loaded_app(gateway.clone(), seeded_settings()).await;
    assert_eq!(app.state().movies().len(), 5);
    assert!(!app.state().is_loading());
    assert_eq!(app.state().error(), None);

    let ids = visible_ids(&app);
    let (first, rest) = ids.split_first().expect("five movies should be visible");

    let timer = start_removal(&mut app, *first);
    assert_eq!(drive(&mut app, timer, 8).await, 1);
    assert_eq!(app.state().movies().len(), 4);
    assert_eq!(app.state().page(), 1);

    let timers: Vec<Cmd> = rest
        .iter()
        .map(|id| start_removal(&mut app, *id))
        .collect();
    let mut elapsed = Vec::new();
    for timer in timers {
        elapsed.push(resolve(timer).await.expect("timer should fire"));
    }

    let follow_ups: Vec<Cmd> = elapsed
        .iter()
        .filter_map(|msg| app.handle_message(msg))
        .collect();

    assert_eq!(follow_ups.len(), 1, "the page advances exactly once");
    assert!(app.state().movies().is_empty());
    assert_eq!(app.state().page(), 2);
    assert!(app.state().is_loading());

    for cmd in follow_ups {
        drive(&mut app, cmd, 8).await;
    }
    assert_eq!(gateway.requested_pages(), vec![1, 2]);
    assert_eq!(app.state().movies().len(), 5);
    assert!(!app.state().is_loading());
}

#[tokio::test(start_paused = true)]
async fn teardown_cancels_pending_timers() {
    let gateway = Arc::new(StubCatalogGateway::with_page(numbered_movies(5)));
    let mut app = loaded_app(gateway, seeded_settings()).await;
    let target = visible_ids(&app).first().copied().expect("a movie should be visible");

    let timer = start_removal(&mut app, target);
    app.teardown();

    assert!(resolve(timer).await.is_none());
    assert!(app.state().entry(target).is_some_and(|entry| entry.removing));
}

#[tokio::test(start_paused = true)]
async fn dropping_the_app_cancels_pending_timers() {
    let gateway = Arc::new(StubCatalogGateway::with_page(numbered_movies(5)));
    let mut app = loaded_app(gateway, seeded_settings()).await;
    let target = visible_ids(&app).first().copied().expect("a movie should be visible");

    let timer = start_removal(&mut app, target);
    drop(app);

    assert!(resolve(timer).await.is_none());
}

#[tokio::test(start_paused = true)]
async fn checkbox_key_removes_the_focused_movie() {
    let settings = WidgetSettings {
        control: RemovalControl::Checkbox,
        ..seeded_settings()
    };
    let gateway = Arc::new(StubCatalogGateway::with_page(numbered_movies(5)));
    let mut app = loaded_app(gateway, settings).await;
    app.handle_message(&AppMsg::CursorDown);
    let focused = app.state().selected().map(|entry| entry.movie.id);

    let timer = app
        .update(Box::new(bubbletea_rs::event::KeyMsg {
            key: KeyCode::Char(' '),
            modifiers: KeyModifiers::empty(),
        }))
        .expect("space should start removal");
    assert!(app.view().contains("[x]"));

    drive(&mut app, timer, 4).await;
    assert_eq!(app.state().movies().len(), 4);
    assert!(focused.is_some_and(|id| app.state().entry(id).is_none()));
}
