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

use crate::helpers::*;
use anyhow::Result;
use std::time::Instant;

/// One cargo invocation of the CI pipeline.
#[derive(Debug, Clone, Copy)]
pub enum CiStep {
    Build,
    Test,
    Check,
    Format,
    Clippy,
}

impl CiStep {
    /// Pipeline order used by `cargo xtask all`.
    pub const PIPELINE: [CiStep; 5] = [
        CiStep::Build,
        CiStep::Test,
        CiStep::Check,
        CiStep::Format,
        CiStep::Clippy,
    ];

    fn title(self) -> &'static str {
        match self {
            CiStep::Build => "Building All Crates",
            CiStep::Test => "Running All Tests",
            CiStep::Check => "Checking All Crates",
            CiStep::Format => "Formatting Code",
            CiStep::Clippy => "Running Clippy",
        }
    }

    fn style(self) -> (&'static str, &'static str) {
        match self {
            CiStep::Build => (HAMMER, BLUE),
            CiStep::Test => (TEST_TUBE, GREEN),
            CiStep::Check => (MAGNIFIER, CYAN),
            CiStep::Format => (BRUSH, MAGENTA),
            CiStep::Clippy => (CLIPPY, YELLOW),
        }
    }

    fn info(self) -> &'static str {
        match self {
            CiStep::Build => "Compiling all workspace crates in debug mode",
            CiStep::Test => "Running unit tests, integration tests and doc tests",
            CiStep::Check => "Checking code for errors without building executables",
            CiStep::Format => "Formatting code using rustfmt with default settings",
            CiStep::Clippy => "Running Clippy linter with warnings as errors",
        }
    }

    fn cargo_args(self) -> &'static [&'static str] {
        match self {
            CiStep::Build => &["build", "--workspace", "--exclude", "xtask"],
            CiStep::Test => &["test", "--workspace"],
            CiStep::Check => &["check", "--workspace"],
            // `fmt` takes `--all`, not `--workspace`
            CiStep::Format => &["fmt", "--all"],
            CiStep::Clippy => &["clippy", "--workspace", "--", "-D", "warnings"],
        }
    }

    fn label(self) -> &'static str {
        match self {
            CiStep::Build => "Build",
            CiStep::Test => "Tests",
            CiStep::Check => "Check",
            CiStep::Format => "Format",
            CiStep::Clippy => "Clippy",
        }
    }
}

pub fn run_step(step: CiStep) -> Result<()> {
    let (emoji, color) = step.style();
    print_task_start(step.title(), emoji, color);
    print_info(step.info());
    execute_command("cargo", step.cargo_args(), step.label())
}

pub fn run_all() -> Result<()> {
    println!("{}", BANNER);
    println!("{}{}Starting full build pipeline...{}", BOLD, CYAN, RESET);

    let start_time = Instant::now();
    let total = CiStep::PIPELINE.len();
    let mut failed = Vec::new();

    for (i, step) in CiStep::PIPELINE.into_iter().enumerate() {
        println!("\n{}{}[{}/{}]{}", BOLD, BLUE, i + 1, total, RESET);
        if run_step(step).is_err() {
            failed.push(step.label());
        }
    }

    println!(
        "\n{}{}━━━ PIPELINE SUMMARY ({:.2}s) ━━━{}",
        BOLD,
        CYAN,
        start_time.elapsed().as_secs_f64(),
        RESET
    );

    if failed.is_empty() {
        print_success(&format!("All {} tasks completed successfully! {}", total, ROCKET));
        Ok(())
    } else {
        anyhow::bail!(
            "Pipeline failed: {}/{} tasks succeeded (failed: {})",
            total - failed.len(),
            total,
            failed.join(", ")
        );
    }
}
