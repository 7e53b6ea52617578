use std::time::Duration;

use rangeslide::clock::ManualClock;
use rangeslide::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();

    let view = slider()
        .min(0.0)
        .max(10.0)
        .value(2.5)
        .track_size(4.0)
        .thumb_radius(8.0)
        .on_change(|value| println!("change  {:.2}", value))
        .on_confirm(|value| println!("confirm {:.2}", value));

    let mut app = App::with_clock(
        view,
        AppConfig {
            width: 240.0,
            height: 60.0,
        },
        ManualClock::new(),
    );
    print_frame("initial", app.frame());

    // Press, drag right past the end, come back and let go
    app.dispatch(&Event::PointerDown { x: 60.0, y: 30.0 });
    for x in [90.0, 150.0, 260.0, 180.0] {
        app.clock().advance(FRAME);
        app.frame();
        app.dispatch(&Event::PointerMove { x, y: 30.0 });
    }
    app.dispatch(&Event::PointerUp { x: 180.0, y: 30.0 });
    let frames = app.run_until_idle(60, FRAME);
    println!("settled after {} frames", frames);
    print_frame("released", app.last_frame());

    // Set from outside, no change callback
    app.root_mut().set_value(7.5);
    print_frame("programmatic", app.frame());

    println!("final value {:.2}", app.root().get_value());
}

fn print_frame(label: &str, frame: &PaintContext) {
    println!("-- {} ({} commands)", label, frame.len());
    for command in frame.commands() {
        println!("   {:?}", command);
    }
}
