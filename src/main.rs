mod audio;
mod config;
mod debug;
mod game;
mod menu;
mod session;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use audio::Audio;
use menu::{AppState, MenuAction, MenuState};
use session::SessionOutcome;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let debug_enabled = parse_args(&args);

    debug::init(debug_enabled)?;
    debug::log("STARTUP", "flapterm starting");

    // Everything fallible happens before the terminal is touched, so a bad
    // config or missing audio device fails with a readable message.
    let config = config::load_config()?;
    let audio = Audio::new(&config.audio)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config, &audio);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Parse command line arguments; returns whether debug logging is enabled
fn parse_args(args: &[String]) -> bool {
    let mut debug_enabled = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "--debug" | "-d" => debug_enabled = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    debug_enabled
}

fn print_usage(program: &str) {
    println!("flapterm - Flappy Bird in your terminal");
    println!();
    println!("Usage: {} [options]", program);
    println!();
    println!("Options:");
    println!("  -d, --debug    Write diagnostics to /tmp/flapterm-debug.log");
    println!("  -h, --help     Show this help");
    println!();
    println!("Controls: Space (or click) to flap, Q to quit.");
    println!(
        "Configuration: {}",
        config::get_config_path().display()
    );
}

/// Top-level state machine: Menu -> Game -> back to Menu, until quit.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &config::Config,
    audio: &Audio,
) -> Result<()> {
    let mut app_state = AppState::Menu;
    let mut menu_state = MenuState::new();

    loop {
        match app_state {
            AppState::Menu => {
                terminal.draw(|f| menu::render_menu(f, &menu_state))?;
                match menu::handle_menu_input(&mut menu_state)? {
                    MenuAction::StartGame => {
                        debug::log("APP", "Menu -> Game");
                        app_state = AppState::Game;
                    }
                    MenuAction::Quit => app_state = AppState::Exiting,
                    MenuAction::None => {}
                }
            }
            AppState::Game => match session::run_session(terminal, config, audio)? {
                SessionOutcome::Finished(score) => {
                    debug::log("APP", &format!("Session over, score {}", score));
                    menu_state.last_score = Some(score);
                    app_state = AppState::Menu;
                }
                SessionOutcome::Quit => app_state = AppState::Exiting,
            },
            AppState::Exiting => {
                debug::log("APP", "Exiting");
                return Ok(());
            }
        }
    }
}
