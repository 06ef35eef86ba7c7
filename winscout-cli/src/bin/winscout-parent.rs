//! Standalone CLI tool for resolving a process's parent pid.

use clap::Parser;

#[derive(Parser)]
#[command(name = "winscout-parent", about = "Resolve the parent pid of a process")]
struct Args {
    /// Process id to find the parent of
    pid: u32,
}

#[cfg(windows)]
fn main() {
    use winscout_core::process::find_parent_process_id;
    use winscout_core::win32::Win32Desktop;

    let args = Args::parse();

    match find_parent_process_id(&Win32Desktop, args.pid) {
        Ok(Some(parent)) => {
            let json = serde_json::json!({
                "process_id": args.pid,
                "parent_process_id": parent,
            });
            println!("{json}");
        }
        Ok(None) => {
            eprintln!("No running process with pid {}", args.pid);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to query processes: {e}");
            std::process::exit(2);
        }
    }
}

#[cfg(not(windows))]
fn main() {
    let _ = Args::parse();
    eprintln!("winscout-parent requires Windows");
    std::process::exit(2);
}
