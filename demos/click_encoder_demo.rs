//! Click encoder demo.
//!
//! Runs the encoder the way the firmware does: a 1 ms "timer" thread calls
//! `service()` through a `SharedClickEncoder`, and the main loop polls every
//! 100 ms and prints what it sees. A third thread plays the user's hand.
//!
//! Pass a TOML file to override the default full-featured configuration:
//!
//! ```text
//! cargo run --example click_encoder_demo -- encoder.toml
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use embedded_hal::digital::{ErrorType, InputPin};
use loklift_encoder::{
    load_config, ActiveLevel, ButtonState, ClickEncoder, ClickEncoderConfig, SharedClickEncoder,
};

/// Simulated input wired to a static level.
struct SimPin(&'static AtomicBool);

impl ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.load(Ordering::Relaxed))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.load(Ordering::Relaxed))
    }
}

// Shaft starts at code 0 (A and B low); the active-low button idles high
static LEVEL_A: AtomicBool = AtomicBool::new(false);
static LEVEL_B: AtomicBool = AtomicBool::new(false);
static LEVEL_BTN: AtomicBool = AtomicBool::new(true);
static RUNNING: AtomicBool = AtomicBool::new(true);

static KNOB: SharedClickEncoder<SimPin, SimPin, SimPin> = SharedClickEncoder::new();

const SERVICE_PERIOD: Duration = Duration::from_millis(1);
const PRINT_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Click Encoder Demo ===\n");

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(path)?,
        None => ClickEncoderConfig::full_featured(),
    };
    println!(
        "Pins: active {:?}, configure inputs with {:?}",
        config.active_level,
        config.active_level.pull()
    );

    let knob = ClickEncoder::new(
        SimPin(&LEVEL_A),
        SimPin(&LEVEL_B),
        SimPin(&LEVEL_BTN),
        &config,
    )?;
    KNOB.install(knob);

    let timer = thread::spawn(|| {
        while RUNNING.load(Ordering::Relaxed) {
            if let Err(e) = KNOB.service() {
                eprintln!("service failed: {}", e);
            }
            thread::sleep(SERVICE_PERIOD);
        }
    });

    let active_low = config.active_level == ActiveLevel::Low;
    let hand = thread::spawn(move || play_hand(active_low));

    let mut last_count = 0;
    while !hand.is_finished() {
        thread::sleep(PRINT_INTERVAL);

        print_button_state(KNOB.get_button()?);

        let increment = KNOB.get_increment()?;
        if increment != 0 {
            print!("Encoder value: {} ", increment);
        }

        let count = KNOB.get_accumulate()?;
        if count != last_count {
            println!("Encoder count: {}", count);
        }
        last_count = count;
    }

    RUNNING.store(false, Ordering::Relaxed);
    timer.join().ok();
    hand.join().ok();

    println!("\n=== Demo Complete ===");
    Ok(())
}

fn print_button_state(state: ButtonState) {
    // No output for Open or Closed to keep the console quiet
    if state.is_event() {
        println!("Button {}", state);
    }
}

/// Turn slowly, turn fast, click, double-click, and hold.
fn play_hand(active_low: bool) {
    let press = |down: bool| LEVEL_BTN.store(down != active_low, Ordering::Relaxed);
    let mut code = 0u8;

    let mut turn = |notches: u32, step_delay: Duration| {
        for _ in 0..notches * 4 {
            code = (code + 1) & 3;
            LEVEL_A.store(code >= 2, Ordering::Relaxed);
            LEVEL_B.store(code == 1 || code == 2, Ordering::Relaxed);
            thread::sleep(step_delay);
        }
    };

    println!("-- slow turn, 5 notches");
    turn(5, Duration::from_millis(60));
    thread::sleep(Duration::from_millis(300));

    println!("-- fast turn, 5 notches");
    turn(5, Duration::from_millis(5));
    thread::sleep(Duration::from_millis(300));

    println!("-- click");
    press(true);
    thread::sleep(Duration::from_millis(80));
    press(false);
    thread::sleep(Duration::from_millis(600));

    println!("-- double click");
    for _ in 0..2 {
        press(true);
        thread::sleep(Duration::from_millis(60));
        press(false);
        thread::sleep(Duration::from_millis(60));
    }
    thread::sleep(Duration::from_millis(600));

    println!("-- long press");
    press(true);
    thread::sleep(Duration::from_millis(2500));
    press(false);
    thread::sleep(Duration::from_millis(300));
}
