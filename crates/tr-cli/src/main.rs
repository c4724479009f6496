/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dotenvy::dotenv;
use indicatif::{ProgressBar, ProgressStyle};
use std::process::ExitCode;
use std::time::Duration;
use tr_client::TokenReportClient;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod dashboard;
mod render;

use dashboard::load_dashboard;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "token-report")]
struct Cli {
  /// Token to analyze
  #[arg(default_value = tr_core::DEFAULT_TOKEN)]
  token: String,

  /// Second token to compare against
  #[arg(short, long)]
  compare: Option<String>,

  /// Print the normalized dashboard as JSON instead of text
  #[arg(long)]
  json: bool,

  /// Report service base URL
  #[arg(long, env = "TR_BASE_URL")]
  base_url: Option<String>,

  /// Verbose output
  #[arg(short, long)]
  verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
  // Load environment variables
  dotenv().ok();

  let cli = Cli::parse();

  // Logs go to stderr so stdout stays clean for --json
  let log_level = if cli.verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

  let config = config::Config::from_env(cli.base_url.as_deref())?;
  let client = TokenReportClient::new(config.client_config)?;
  debug!("Using report service at {}", client.base_url());

  let spinner = fetch_spinner();
  let result = load_dashboard(&client, &cli.token, cli.compare.as_deref()).await;
  spinner.finish_and_clear();

  let dashboard = match result {
    Ok(dashboard) => dashboard,
    Err(e) => {
      eprintln!("{}", format!("Error fetching data: {}", e).red());
      return Ok(ExitCode::FAILURE);
    }
  };

  for message in render::fetched_messages(&dashboard) {
    eprintln!("{}", message.green());
  }

  if let Some(failure) = &dashboard.comparison_failure {
    eprintln!(
      "{}",
      format!("Error fetching data for {}: {}", failure.token_name, failure.error).yellow()
    );
  }

  if cli.json {
    println!("{}", serde_json::to_string_pretty(&dashboard)?);
  } else {
    print!("{}", render::render_dashboard(&dashboard));
  }

  Ok(ExitCode::SUCCESS)
}

fn fetch_spinner() -> ProgressBar {
  let spinner = ProgressBar::new_spinner();
  spinner.set_style(
    ProgressStyle::default_spinner()
      .template("{spinner:.cyan} {msg}")
      .unwrap_or_else(|_| ProgressStyle::default_spinner()),
  );
  spinner.set_message("Fetching data...");
  spinner.enable_steady_tick(Duration::from_millis(100));
  spinner
}
