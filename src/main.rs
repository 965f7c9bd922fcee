use std::time::Duration;

use calendar_widget::app::App;
use calendar_widget::config::Config;
use calendar_widget::event::{self, Input};
use calendar_widget::{logging, theme, tui, ui};
use chrono::Local;
use color_eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    logging::init(&config.log)?;
    theme::init(config.theme.to_theme());
    log::info!("starting with theme {}", theme::current().name);

    let mut app = App::new(Local::now().naive_local(), config.picker);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    log::info!("exiting with {} event(s) in memory", app.state.store.len());
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        app.tick(Local::now().naive_local());
        terminal.draw(|frame| ui::draw(frame, app))?;

        match event::next_input(Duration::from_millis(100))? {
            Some(Input::Key(key)) => app.handle_key(key),
            Some(Input::Click { column, row }) => app.handle_click(column, row),
            None => {}
        }
    }

    Ok(())
}
