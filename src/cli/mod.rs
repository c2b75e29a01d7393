// ABOUTME: CLI argument parsing for tmux-picker
//
// The picker has a single interactive mode; clap provides --help and --version.

use clap::Parser;

/// Pick a tmux session or window and switch the current client to it
#[derive(Parser, Debug)]
#[command(name = "tmux-picker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
