use std::{sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

use lovematch::{
    core::raw_msg::RawMsg,
    domain::{SeedProfiles, StaticProfiles},
    infrastructure::{
        config::Config,
        tui::{test::TestTui, Event, TuiLike},
    },
    integration::{app_runner::AppRunner, runtime::Runtime},
    AppState,
};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn seeded_state() -> AppState {
    let config = Config::embedded().expect("embedded config parses");
    AppState::new_with_config(&SeedProfiles, config)
}

async fn run_with(state: AppState, events: Vec<Event>) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
    let test_tui = Arc::new(Mutex::new(TestTui::with_events(80, 30, events)?));
    let shared = Arc::clone(&test_tui);
    let tui: Arc<Mutex<dyn TuiLike + Send>> = shared;
    let mut runner = AppRunner::new(state, tui);
    runner.run().await?;
    Ok((runner, test_tui))
}

#[tokio::test]
async fn test_like_shows_toast_on_screen() -> Result<()> {
    let (runner, tui) = run_with(seeded_state(), vec![key(KeyCode::Right)]).await?;

    assert_eq!(runner.runtime().state().deck.liked().len(), 1);
    let screen = tui.lock().await.screen();
    assert!(screen.contains("Like sent!"));
    assert!(screen.contains("You liked Anna"));
    assert!(screen.contains("Matches (1)"));
    Ok(())
}

#[tokio::test]
async fn test_empty_deck_placeholder_on_screen() -> Result<()> {
    let config = Config::embedded()?;
    let state = AppState::new_with_config(&StaticProfiles(vec![]), config);

    let (_, tui) = run_with(state, vec![key(KeyCode::Right)]).await?;

    let screen = tui.lock().await.screen();
    assert!(screen.contains("New profiles coming soon!"));
    assert!(!screen.contains("Like sent!"));
    Ok(())
}

#[tokio::test]
async fn test_tabs_render_their_views() -> Result<()> {
    let (_, tui) = run_with(seeded_state(), vec![key(KeyCode::Tab)]).await?;
    assert!(tui.lock().await.screen().contains("No matches yet"));

    let (_, tui) = run_with(seeded_state(), vec![key(KeyCode::Char('3'))]).await?;
    assert!(tui.lock().await.screen().contains("[Verify]"));
    Ok(())
}

#[tokio::test]
async fn test_filter_dialog_renders_draft() -> Result<()> {
    let events = vec![key(KeyCode::Char('s')), key(KeyCode::Right)];

    let (runner, tui) = run_with(seeded_state(), events).await?;

    assert!(tui.lock().await.screen().contains("Age: 19 - 35 years"));
    assert_eq!(runner.runtime().state().filter.applied().age_range.min(), 18);
    Ok(())
}

#[tokio::test]
async fn test_swipe_settles_through_the_executor() -> Result<()> {
    let mut config = Config::embedded()?;
    config.deck.swipe_delay_ms = 10;
    let mut runtime = Runtime::new_with_executor(AppState::new_with_config(&SeedProfiles, config));

    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)));
    runtime.run_update_cycle().map_err(color_eyre::eyre::Report::msg)?;
    assert!(runtime.state().deck.is_animating());
    assert_eq!(runtime.state().deck.cursor(), 0);

    tokio::time::sleep(Duration::from_millis(100)).await;
    runtime.run_update_cycle().map_err(color_eyre::eyre::Report::msg)?;

    assert!(!runtime.state().deck.is_animating());
    assert_eq!(runtime.state().deck.cursor(), 1);
    assert!(runtime.state().deck.liked().is_empty());
    Ok(())
}
