use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::input::{map_key, GameInput};
use flappy::sim::logic::{flap, reset, tick};
use flappy::GameWorld;
use flappy::ui::game_scene::{render_countdown, render_game, render_game_over, render_title};
use flappy::{build_info, COUNTDOWN_SECS, INPUT_POLL_MS, PLAYFIELD, TICK_INTERVAL_MS};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Driver-level screen state. The countdown and replay flow live here, not in
/// the simulation: the sim only knows Running and GameOver.
enum Screen {
    Title,
    Countdown { remaining: u8, last_step: Instant },
    Playing,
    GameOver,
}

impl Screen {
    fn countdown() -> Self {
        Screen::Countdown {
            remaining: COUNTDOWN_SECS,
            last_step: Instant::now(),
        }
    }
}

/// How long the event loop may block waiting for input. Only the Playing
/// screen is paced by the tick interval; everywhere else the loop just
/// sleeps between key presses so idle screens don't spin.
fn poll_timeout(screen: &Screen, since_last_tick: Duration) -> Duration {
    match screen {
        Screen::Playing => {
            Duration::from_millis(TICK_INTERVAL_MS).saturating_sub(since_last_tick)
        }
        _ => Duration::from_millis(INPUT_POLL_MS),
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("flappy {}", build_info::VERSION);
                return Ok(());
            }
            other => {
                eprintln!("unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut world = GameWorld::new(PLAYFIELD);
    reset(&mut world, &mut rng);

    let mut screen = Screen::Title;
    // At most one flap reaches the sim per tick; extra presses within a tick
    // collapse into one.
    let mut flap_queued = false;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            match &screen {
                Screen::Title => render_title(frame, area),
                Screen::Countdown { remaining, .. } => {
                    render_countdown(frame, area, &world, *remaining)
                }
                Screen::Playing => render_game(frame, area, &world),
                Screen::GameOver => render_game_over(frame, area, &world),
            }
        })?;

        let timeout = poll_timeout(&screen, last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    Some(GameInput::Quit) => return Ok(()),
                    Some(GameInput::Flap) => match screen {
                        Screen::Title => screen = Screen::countdown(),
                        Screen::Playing => flap_queued = true,
                        Screen::GameOver => {
                            reset(&mut world, &mut rng);
                            flap_queued = false;
                            screen = Screen::countdown();
                        }
                        Screen::Countdown { .. } => {}
                    },
                    Some(GameInput::Other) | None => {}
                }
            }
        }

        match screen {
            Screen::Countdown {
                ref mut remaining,
                ref mut last_step,
            } => {
                if last_step.elapsed() >= Duration::from_secs(1) {
                    if *remaining <= 1 {
                        last_tick = Instant::now();
                        screen = Screen::Playing;
                    } else {
                        *remaining -= 1;
                        *last_step = Instant::now();
                    }
                }
            }
            Screen::Playing => {
                if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
                    last_tick = Instant::now();
                    if flap_queued {
                        flap(&mut world);
                        flap_queued = false;
                    }
                    tick(&mut world, &mut rng);
                    if world.game_over {
                        screen = Screen::GameOver;
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_screens_never_poll_with_zero_timeout() {
        // Title/Countdown/GameOver are not tick-paced: no matter how stale
        // last_tick is, the loop must keep blocking on input
        let stale = Duration::from_secs(3600);
        for screen in [Screen::Title, Screen::countdown(), Screen::GameOver] {
            assert_eq!(
                poll_timeout(&screen, stale),
                Duration::from_millis(INPUT_POLL_MS)
            );
        }
    }

    #[test]
    fn test_playing_polls_for_the_rest_of_the_tick() {
        let timeout = poll_timeout(&Screen::Playing, Duration::from_millis(10));
        assert_eq!(timeout, Duration::from_millis(TICK_INTERVAL_MS - 10));
    }

    #[test]
    fn test_playing_poll_saturates_when_tick_is_due() {
        let timeout = poll_timeout(&Screen::Playing, Duration::from_millis(100));
        assert_eq!(timeout, Duration::ZERO);
    }
}
