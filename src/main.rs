mod config;
mod display;
mod game;
mod game_modes;
mod logging;
mod menu;
mod ui;

use std::time::Duration;

use anyhow::Result;
use tracing::info;

use config::Controls;
use display::Display;
use game::{Game, InputAction};
use menu::{ItemAction, Menu, MenuExit};

const WINDOW_TITLE: &str = "Pong";

/// What the driver does after the menu closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Play,
    ShowMenu,
    Exit,
}

fn next_step(exit: MenuExit) -> Step {
    match exit {
        MenuExit::Activate(ItemAction::StartGame) => Step::Play,
        MenuExit::Activate(ItemAction::Quit) | MenuExit::Terminate => Step::Exit,
        MenuExit::Dismissed => Step::ShowMenu,
    }
}

fn main() -> Result<()> {
    if let Some(path) = logging::init()? {
        info!(path = %path.display(), "logging initialized");
    }
    info!("session started");

    let config = config::load_config()?;
    let controls = config::load_controls(&config);
    let hold_timeout = Duration::from_millis(config.input.hold_timeout_ms);

    let mut menu = Menu::main_menu(config.menu.clone(), &config.game)?;
    let mut game = Game::new(config.game.clone(), controls);

    // Restored when dropped, before the result is reported
    let mut display = Display::acquire(WINDOW_TITLE)?;
    let result = run(&mut display, &mut menu, &mut game, &controls, hold_timeout);
    drop(display);

    info!("session ended");
    result
}

fn run(
    display: &mut Display,
    menu: &mut Menu,
    game: &mut Game,
    controls: &Controls,
    hold_timeout: Duration,
) -> Result<()> {
    loop {
        let exit = menu.run(display, controls, game.config.fps)?;
        info!(?exit, resumes = exit.resumes(), "menu closed");

        match next_step(exit) {
            Step::Play => {
                game.reset();
                if game.run(display, hold_timeout)? == InputAction::Quit {
                    return Ok(());
                }
            }
            Step::ShowMenu => {}
            Step::Exit => return Ok(()),
        }
    }
}
