/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_grid::{CLIArg, CommonResult, GridConfig, run_app, try_initialize_logging_global,
                ui_str};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> CommonResult<()> {
    let cli_arg = CLIArg::parse();
    let config = GridConfig::try_from(&cli_arg)?;

    let enable_logging = config.enable_logging;
    enable_logging.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", config = ?config);
    });

    if let Err(error) = run_app(config).await {
        // % is Display, ? is Debug.
        tracing::error!(
            message = "Could not run grid due to the following problem",
            error = ?error
        );
        return Err(error);
    }

    println!("{}", ui_str::goodbye_message());

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    Ok(())
}
