use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::env;
use std::fs::File;

use ccommits::catalog;
use ccommits::git::GitInfo;
use ccommits::tui::{self, SessionInfo};

#[derive(Parser)]
#[command(name = "ccommits", about = "Conventional commits, composed in the terminal")]
struct Args {
    /// Remote to push to (defaults to the only configured remote)
    #[arg(short, long)]
    remote: Option<String>,

    /// Skip the confirmation pauses before git runs
    #[arg(short, long)]
    yes: bool,

    /// Commit without pushing
    #[arg(long)]
    no_push: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize file logger - writes to ccommits.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("ccommits.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
    log::info!("ccommits {} starting up", catalog::VERSION);

    println!("{} - v{}", catalog::TITLE, catalog::VERSION);

    let cwd = env::current_dir()?;
    let mut info = GitInfo::discover(&cwd)?;
    for line in preamble_lines(
        &info.repo_name,
        &info.current_branch,
        &info.branches,
        &info.remotes,
    ) {
        println!("{line}");
    }

    let Some(status) = info.changes()? else {
        println!("[*] Nothing to commit, the working tree is clean.");
        return Ok(());
    };
    log::debug!("Pending changes:\n{status}");

    info.resolve_remote(args.remote.as_deref())?;
    println!("\x1b[3m{} {}\x1b[0m", catalog::REMOTE_MARK, info.chosen_remote);

    let session = SessionInfo {
        repo_name: info.repo_name.clone(),
        branch: info.current_branch.clone(),
        remote: info.chosen_remote.clone(),
    };

    let message = {
        let mut screen = tui::screen::CrosstermScreen::new()?;
        tui::run(&mut screen, &session)
        // Screen drops here, restoring the terminal before anything prints.
    };

    let Some(message) = message else {
        println!("[*] Session abandoned, nothing was committed.");
        return Ok(());
    };

    println!("[*] Composed message:\n\n{message}\n");
    info.finalize(&message, args.yes, args.no_push)?;
    println!("[*] Done.");
    Ok(())
}

/// The repository facts printed before the session starts: name and current
/// branch, then every detected branch and every possible push remote.
fn preamble_lines(
    repo_name: &str,
    current_branch: &str,
    branches: &[String],
    remotes: &[String],
) -> Vec<String> {
    vec![
        format!(
            "\x1b[3m{} {}  {} {}\x1b[0m",
            catalog::REPO_MARK,
            repo_name,
            catalog::BRANCH_MARK,
            current_branch,
        ),
        format!("[*] Detected repository branches: {}", branches.join(", ")),
        format!("[*] Possible remotes: {}", remotes.join(", ")),
    ]
}
