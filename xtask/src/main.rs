// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Build automation and asset tasks for resmap
// Run with: cargo xtask <command>

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::ci::CiStep;
use helpers::print_error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask", version, about = "Build automation for resmap")]
struct Cli {
    #[command(subcommand)]
    command: Option<Task>,
}

#[derive(Subcommand)]
enum Task {
    /// Build all crates in the workspace.
    Build,
    /// Run all tests in the workspace.
    Test,
    /// Run `cargo check` on all crates.
    Check,
    /// Format all code in the workspace.
    Format,
    /// Run clippy on all crates with warnings as errors.
    Clippy,
    /// Run every CI step in order.
    All,
    /// Regenerate the resource manifest from the project's Resources directories.
    Manifest {
        /// Path to the resources configuration file.
        #[arg(long, default_value = "Resources.toml")]
        config: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let Some(task) = cli.command else {
        helpers::print_custom_help();
        return;
    };

    if let Err(err) = run(task) {
        print_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(task: Task) -> Result<()> {
    match task {
        Task::Build => commands::ci::run_step(CiStep::Build),
        Task::Test => commands::ci::run_step(CiStep::Test),
        Task::Check => commands::ci::run_step(CiStep::Check),
        Task::Format => commands::ci::run_step(CiStep::Format),
        Task::Clippy => commands::ci::run_step(CiStep::Clippy),
        Task::All => commands::ci::run_all(),
        Task::Manifest { config } => commands::manifest::generate(&config),
    }
}
