// SPDX-License-Identifier: MPL-2.0
use iced::Size;
use menu_flipbook::config::{self, Config, ViewerConfig};
use menu_flipbook::document::StaticRenderer;
use menu_flipbook::ui::menu::{MenuPage, MenuTab};
use menu_flipbook::ui::state::FlipDirection;
use menu_flipbook::ui::viewer::{Effect, Message, Settings, TokioFlipTimer};
use std::time::Duration;
use tempfile::tempdir;
use tokio::sync::mpsc;

fn renderer() -> StaticRenderer {
    StaticRenderer::new()
        .with_document(MenuTab::Food.source(), 8)
        .with_document(MenuTab::Beverage.source(), 4)
}

#[test]
fn test_viewer_settings_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        viewer: ViewerConfig {
            max_scale: 2.0,
            initial_scale: 2.5,
            flip_duration_ms: 20,
            ..ViewerConfig::default()
        },
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, config);

    let settings = Settings::from(&loaded.viewer);
    assert_eq!(settings.bounds.max(), 2.0);
    assert_eq!(settings.initial_scale, 2.0);
    assert_eq!(settings.flip_duration.millis(), 100);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_partial_config_keeps_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[viewer]\nflip_duration_ms = 900\n").expect("Failed to write file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded.viewer.flip_duration_ms, 900);
    assert_eq!(loaded.viewer.min_scale, config::MIN_SCALE);
    assert_eq!(loaded.viewer.max_scale, config::MAX_SCALE);
}

#[tokio::test(start_paused = true)]
async fn test_flip_completes_on_tokio_runtime() {
    let renderer = renderer();
    let (sender, mut tickets) = mpsc::unbounded_channel();
    let mut page = MenuPage::new(
        Settings::default(),
        Some(Size::new(1280.0, 900.0)),
        move || TokioFlipTimer::new(sender.clone()),
    );
    page.load_active(&renderer);

    page.handle(Message::ChangePage(FlipDirection::Forward));
    let ticket = tickets.recv().await.expect("flip completion should arrive");
    let effect = page.handle(Message::FlipElapsed(ticket));

    assert_eq!(
        effect,
        Effect::PageChanged {
            current_page: 2,
            total_pages: 8
        }
    );
    assert_eq!(page.viewer().page_indicator().as_deref(), Some("2 / 8"));
}

#[tokio::test(start_paused = true)]
async fn test_tab_switch_mid_flip_drops_completion() {
    let renderer = renderer();
    let (sender, mut tickets) = mpsc::unbounded_channel();
    let mut page = MenuPage::new(
        Settings::default(),
        Some(Size::new(1280.0, 900.0)),
        move || TokioFlipTimer::new(sender.clone()),
    );
    page.load_active(&renderer);
    page.handle(Message::ChangePage(FlipDirection::Forward));

    tokio::time::advance(Duration::from_millis(300)).await;
    assert!(page.select_tab(MenuTab::Beverage));
    page.load_active(&renderer);

    let received = tokio::time::timeout(Duration::from_secs(2), tickets.recv()).await;
    assert!(received.is_err(), "completion of the old viewer must not arrive");

    let viewer = page.viewer();
    assert_eq!(viewer.page_indicator().as_deref(), Some("1 / 4"));
    assert!(!viewer.flip().is_flipping());
    assert!(viewer.can_go_next());
}

#[tokio::test(start_paused = true)]
async fn test_rapid_requests_advance_one_page() {
    let renderer = renderer();
    let (sender, mut tickets) = mpsc::unbounded_channel();
    let mut page = MenuPage::new(Settings::default(), None, move || {
        TokioFlipTimer::new(sender.clone())
    });
    page.load_active(&renderer);

    for _ in 0..5 {
        page.handle(Message::ChangePage(FlipDirection::Forward));
    }
    let ticket = tickets.recv().await.expect("flip completion should arrive");
    page.handle(Message::FlipElapsed(ticket));

    let extra = tokio::time::timeout(Duration::from_secs(2), tickets.recv()).await;
    assert!(extra.is_err(), "only one completion may be scheduled");
    assert_eq!(page.viewer().flip().current_page(), 2);
}
