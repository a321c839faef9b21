// SPDX-License-Identifier: MPL-2.0
use env_logger::Env;
use iced::Size;
use log::{debug, info};
use menu_flipbook::config;
use menu_flipbook::document::StaticRenderer;
use menu_flipbook::error::{Error, Result};
use menu_flipbook::script::{self, Action};
use menu_flipbook::ui::menu::{MenuPage, MenuTab};
use menu_flipbook::ui::state::FlipDirection;
use menu_flipbook::ui::viewer::{FlipTicket, Message, Settings, TokioFlipTimer};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
const DEFAULT_VIEWPORT_HEIGHT: f32 = 900.0;
const DEFAULT_FOOD_PAGES: u32 = 8;
const DEFAULT_BEVERAGE_PAGES: u32 = 4;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let viewport = args
        .opt_value_from_fn("--viewport", script::parse_size)?
        .unwrap_or_else(|| Size::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT));
    let food_pages: u32 = args
        .opt_value_from_str("--food-pages")?
        .unwrap_or(DEFAULT_FOOD_PAGES);
    let beverage_pages: u32 = args
        .opt_value_from_str("--beverage-pages")?
        .unwrap_or(DEFAULT_BEVERAGE_PAGES);
    let actions = args
        .finish()
        .into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| Error::InvalidArgument(format!("non UTF-8 argument {arg:?}")))
                .and_then(|arg| arg.parse::<Action>())
        })
        .collect::<Result<Vec<_>>>()?;

    let config = match config_path {
        Some(path) => config::load_from_path(&path)?,
        None => config::load()?,
    };
    let settings = Settings::from(&config.viewer);
    debug!("viewer settings: {settings:?}");

    let mut renderer = StaticRenderer::new()
        .with_document(MenuTab::Food.source(), food_pages)
        .with_document(MenuTab::Beverage.source(), beverage_pages);

    let (sender, mut tickets) = mpsc::unbounded_channel();
    let mut page = MenuPage::new(settings, Some(viewport), move || {
        TokioFlipTimer::new(sender.clone())
    });
    page.load_active(&renderer);

    for action in actions {
        run_action(&mut page, &renderer, &mut tickets, action).await;
    }

    page.render(&mut renderer);
    report(&page, &renderer);
    Ok(())
}

async fn run_action(
    page: &mut MenuPage<TokioFlipTimer>,
    renderer: &StaticRenderer,
    tickets: &mut UnboundedReceiver<FlipTicket>,
    action: Action,
) {
    debug!("action {action:?}");
    match action {
        Action::Next => {
            page.handle(Message::ChangePage(FlipDirection::Forward));
        }
        Action::Prev => {
            page.handle(Message::ChangePage(FlipDirection::Backward));
        }
        Action::Wait(duration) => wait(page, tickets, duration).await,
        Action::Settle => settle(page, tickets).await,
        Action::Tab(tab) => {
            if page.select_tab(tab) {
                page.load_active(renderer);
            }
        }
        Action::Resize(size) => {
            page.handle(Message::ViewportResized(size));
        }
        Action::Pinch(_) | Action::Wheel(_) | Action::Scroll(_) => {
            for event in action.input_events() {
                page.handle(Message::RawEvent(event));
            }
        }
    }
}

/// Runs for `duration`, delivering every completion that comes due meanwhile.
async fn wait(
    page: &mut MenuPage<TokioFlipTimer>,
    tickets: &mut UnboundedReceiver<FlipTicket>,
    duration: Duration,
) {
    let deadline = tokio::time::sleep(duration);
    tokio::pin!(deadline);
    loop {
        tokio::select! {
            () = &mut deadline => break,
            Some(ticket) = tickets.recv() => {
                page.handle(Message::FlipElapsed(ticket));
            }
        }
    }
}

async fn settle(page: &mut MenuPage<TokioFlipTimer>, tickets: &mut UnboundedReceiver<FlipTicket>) {
    while page.viewer().pending_ticket().is_some() {
        match tickets.recv().await {
            Some(ticket) => {
                page.handle(Message::FlipElapsed(ticket));
            }
            None => break,
        }
    }
}

fn report(page: &MenuPage<TokioFlipTimer>, renderer: &StaticRenderer) {
    let viewer = page.viewer();
    let size = viewer.size();
    info!("{} ({})", page.title(), viewer.source());
    println!("tab: {}", page.active_tab());
    println!(
        "page: {}",
        viewer.page_indicator().as_deref().unwrap_or("loading")
    );
    println!("scale: {:.2}", viewer.scale());
    println!(
        "size: {}x{} (page width {:.1})",
        size.width, size.height, size.page_width
    );
    for request in renderer.rendered() {
        println!(
            "render: {:?} page {} at {:.1}px",
            request.layer, request.page, request.width
        );
    }
}
