use clap::Parser;
use spacetime_log::{ConsoleSink, Field, JsonLinesSink, Logger, SpacetimeEvent};
use std::path::PathBuf;

/// Robot log writer example
#[derive(Debug, clap::Parser)]
struct Opts {
    /// File to append JSON log records to
    #[arg(default_value = "robot.log")]
    pub log_file: PathBuf,
}

fn main() {
    tracing_subscriber::fmt::init();

    let opts = Opts::parse();

    let logger = Logger::new(
        vec![
            Box::new(ConsoleSink::new()),
            Box::new(JsonLinesSink::new(&opts.log_file)),
        ],
        [
            Field::new("Robot", "Competition"),
            Field::new("Team", 2175),
        ],
    );

    // A forest of events: three roots, nested and interleaved
    let a = SpacetimeEvent::new("A", &logger);
    let f = SpacetimeEvent::new("F", &logger);
    let g = SpacetimeEvent::new("G", &logger);
    let b = a.make_child("B");
    let c = b.make_child("C");
    let d = b.make_child("D");
    let e = c.make_child("E");
    let h = g.make_child("H");

    a.start();
    b.start();
    c.start();
    d.start();
    e.start();
    e.end();
    c.end();
    f.start();
    d.end();
    b.end();
    a.end();
    g.start();
    h.start();
    f.end();
    h.end();
    g.end();

    for (output, current_draw) in [(0.84, 5.0), (0.25, 1.7), (0.5, 3.0), (0.35, 7.0)] {
        logger.info(
            "Talon1 Data",
            [
                Field::new("data/talon1/Output", output),
                Field::new("data/talon1/CurrentDraw", current_draw),
            ],
        );
    }

    let teleop = logger.derive([Field::new("Mode", "Teleop")]);
    teleop.debug("Gyro sample", [Field::new("GyroAngle", 22.2)]);
    teleop.warning("Battery sag", [Field::new("Voltage", 10.9)]);
}
