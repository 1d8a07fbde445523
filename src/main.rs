//! Terminal puzzle runner (default binary).
//!
//! Crossterm input, a framebuffer renderer, and a `SessionDriver` that owns
//! the game session. Best scores go to a JSON file.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use grid_puzzle::config::Args;
use grid_puzzle::core::SimpleRng;
use grid_puzzle::engine::SessionDriver;
use grid_puzzle::input::{map_key, should_quit};
use grid_puzzle::store::JsonFileStore;
use grid_puzzle::term::{FrameBuffer, SessionView, TerminalRenderer, Viewport};
use grid_puzzle::types::Input;

/// Frame cadence; gravity is measured in real elapsed time, not frames
const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    let args = Args::parse();
    args.init_logging()?;

    let seed = args.resolved_seed();
    log::info!(
        "starting {} with seed {} (store {})",
        args.variant.as_str(),
        seed,
        args.store.display()
    );

    let store = JsonFileStore::open(&args.store);
    let mut driver = SessionDriver::new(args.variant, SimpleRng::new(seed), store, args.driver_config());
    driver.enqueue(Input::Restart);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut driver);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Err(err) = driver.store().flush() {
        log::warn!("failed to save scores: {:#}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, driver: &mut SessionDriver<JsonFileStore>) -> Result<()> {
    let view = SessionView::default();
    let variant = driver.session().variant();
    let frame = Duration::from_millis(FRAME_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_advance = Instant::now();

    loop {
        let elapsed = last_advance.elapsed();
        last_advance = Instant::now();
        driver.advance(elapsed.as_millis().min(u32::MAX as u128) as u32);

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(driver.session(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next frame.
        let timeout = frame
            .checked_sub(last_advance.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if !event::poll(timeout)? {
            continue;
        }
        // Drain everything that arrived; the driver applies it in order.
        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(input) = map_key(key, variant) {
                        driver.enqueue(input);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
            if !event::poll(Duration::from_secs(0))? {
                break;
            }
        }
    }
}
