//! Renders `staybook.1` into `OUT_DIR`.
//!
//! Build scripts cannot link the crate they build, so the command tree is
//! restated here. Keep it in step with `src/cli.rs`.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Arguments shared by `create`, `extend` and `check`.
fn booking_args() -> Vec<Arg> {
    vec![
        Arg::new("guest")
            .long("guest")
            .help("Guest name")
            .value_name("NAME"),
        Arg::new("unit")
            .long("unit")
            .help("Unit identifier")
            .value_name("ID"),
        Arg::new("check-in")
            .long("check-in")
            .help("Check-in date")
            .value_name("YYYY-MM-DD"),
        Arg::new("nights")
            .long("nights")
            .help("Number of nights")
            .value_name("N"),
        Arg::new("payload")
            .long("payload")
            .help("Booking as JSON")
            .value_name("JSON"),
    ]
}

fn dry_run() -> Arg {
    Arg::new("dry-run")
        .long("dry-run")
        .help("Validate and show the planned change without writing")
        .action(ArgAction::SetTrue)
}

fn build_cli() -> Command {
    Command::new("staybook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate and record short-term rental bookings")
        .long_about(
            "Command-line tool that refuses bookings which would double-book a guest or a unit",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("STAYBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("STAYBOOK_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(ArgAction::SetTrue)
                .env("STAYBOOK_DISABLE_AUTOINIT"),
        )
        .arg(
            Arg::new("lookup")
                .long("lookup")
                .help("How existing bookings are compared (first-match or all-matches)")
                .value_name("STRATEGY")
                .global(true)
                .env("STAYBOOK_LOOKUP"),
        )
        .subcommands(vec![
            Command::new("create")
                .about("Validate and record a new booking")
                .args(booking_args())
                .arg(dry_run()),
            Command::new("extend")
                .about("Extend an existing booking to a larger number of nights")
                .args(booking_args())
                .arg(dry_run()),
            Command::new("check")
                .about("Check whether a booking could be created, without recording it")
                .args(booking_args()),
            Command::new("list")
                .about("List stored bookings")
                .arg(Arg::new("format").long("format").value_name("FORMAT"))
                .arg(Arg::new("guest").long("guest").value_name("NAME"))
                .arg(Arg::new("unit").long("unit").value_name("ID")),
            Command::new("init")
                .about("Initialize staybook data directory and database")
                .arg(
                    Arg::new("overwrite")
                        .long("overwrite")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("with-config")
                        .long("with-config")
                        .action(ArgAction::SetTrue),
                )
                .arg(dry_run()),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("staybook.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
