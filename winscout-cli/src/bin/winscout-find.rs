//! Standalone CLI tool for finding top-level windows, printed as JSON.

use clap::Parser;

#[derive(Parser)]
#[command(name = "winscout-find", about = "Find top-level windows matching criteria")]
struct Args {
    /// Only match windows owned by this process id
    #[arg(long)]
    pid: Option<u32>,

    /// Exact window class name to match
    #[arg(long)]
    class: Option<String>,

    /// Case-sensitive title substring to match
    #[arg(long)]
    title: Option<String>,

    /// Collect every match instead of stopping at the first
    #[arg(long)]
    all: bool,

    /// Per-window title read timeout in milliseconds
    #[arg(long, default_value = "100")]
    timeout_ms: u64,

    /// Compact JSON output (no pretty-printing)
    #[arg(long)]
    compact: bool,
}

#[cfg(windows)]
fn main() {
    use std::time::Duration;

    use winscout_core::win32::Win32Desktop;
    use winscout_core::window::{find_windows, MatchCriteria};

    let args = Args::parse();

    let criteria = MatchCriteria {
        process_id: args.pid,
        class_name: args.class,
        title_substring: args.title,
        stop_at_first_match: !args.all,
        title_timeout: Duration::from_millis(args.timeout_ms),
    };

    let handles = match find_windows(&Win32Desktop, &criteria) {
        Ok(handles) => handles,
        Err(e) => {
            eprintln!("Failed to enumerate windows: {e}");
            std::process::exit(2);
        }
    };

    let json = if args.compact {
        serde_json::to_string(&handles).unwrap()
    } else {
        serde_json::to_string_pretty(&handles).unwrap()
    };

    println!("{json}");
}

#[cfg(not(windows))]
fn main() {
    let _ = Args::parse();
    eprintln!("winscout-find requires Windows");
    std::process::exit(2);
}
