//! A small wdg application: a status bar root object and a stack of windows
//! cycled with Tab.

/// Demo widgets and constructors.
mod bar;

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use bar::StatusBar;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::fmt;
use wdg::{
    LoopOptions, ObjectFlags, ObjectType, Wdg,
    backend::crossterm::{CrosstermBackend, install_panic_hook},
};

/// Drive the wdg toolkit against the current terminal
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Write debug logs to this file
    #[clap(short, long)]
    log: Option<PathBuf>,

    /// Key that exits the demo
    #[clap(short, long, default_value_t = 'q')]
    exit: char,

    /// Input timeout in milliseconds
    #[clap(short, long, default_value_t = 100)]
    timeout: u64,

    /// Number of windows to open at startup
    #[clap(short, long, default_value_t = 2)]
    windows: usize,

    /// Print a registry dump after exit
    #[clap(short, long)]
    dump: bool,
}

/// Send tracing output to a file. The terminal belongs to the toolkit.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let format = fmt::format()
        .with_level(true)
        .with_line_number(true)
        .with_ansi(false)
        .without_time()
        .compact();
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(Level::DEBUG)
        .event_format(format)
        .init();
    Ok(())
}

/// Entry point.
pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log {
        init_logging(path)?;
    }

    let options = LoopOptions::default().input_timeout(Duration::from_millis(args.timeout));
    let mut wdg = Wdg::new(CrosstermBackend::new()).with_options(options);
    bar::register(&mut wdg);

    let _hook = install_panic_hook();
    wdg.initialize()?;

    let root = wdg.create_object(
        ObjectType::Menu,
        ObjectFlags::ROOT_OBJECT | ObjectFlags::VISIBLE,
    )?;
    for _ in 0..args.windows {
        wdg.create_object(
            ObjectType::Window,
            ObjectFlags::VISIBLE | ObjectFlags::WANTS_FOCUS,
        )?;
    }
    wdg.redraw_all()?;
    wdg.switch_focus()?;

    wdg.set_idle_callback(Some(Box::new(move |wdg: &mut Wdg| {
        let dirty = wdg
            .with_widget::<StatusBar, _>(root, StatusBar::tick)?
            .unwrap_or(false);
        if dirty {
            wdg.redraw_all()
        } else {
            wdg.redraw_object(root)
        }
    })));

    let ret = wdg.run_event_loop(args.exit);
    let ticks = wdg.with_widget::<StatusBar, _>(root, |b| b.ticks())?;
    tracing::info!(?ticks, ok = ret.is_ok(), "demo finished");
    wdg.cleanup()?;
    if args.dump {
        eprint!("{}", wdg.dump_ansi()?);
    }
    ret?;
    Ok(())
}
