use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::{Config, ConfigError};
use crate::profiles::ProfileUrls;
use crate::query::{build_query, company_or_default, DEFAULT_COMPANY};
use crate::report;
use crate::tavily::{SearchError, SearchRequest, WebSearch, MAX_RESULTS};

const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {msg}";

/// How a lookup ended. Every variant has already been reported to the user.
#[derive(Debug)]
pub enum SearchOutcome {
    Profiles(ProfileUrls),
    Config(ConfigError),
    Search(SearchError),
}

/// One search call, then filter and dedupe the returned URLs.
pub async fn find_profiles<S: WebSearch>(search: &S, query: &str) -> Result<ProfileUrls, SearchError> {
    let request = SearchRequest {
        query,
        max_results: MAX_RESULTS,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Searching...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let response = search.search(&request).await;
    spinner.finish_and_clear();

    let response = response?;
    info!("Service returned {} results", response.results.len());
    Ok(ProfileUrls::collect(&response.results))
}

/// Read the company name unless one was supplied up front.
fn resolve_company<R: BufRead, W: Write>(
    company: Option<String>,
    input: &mut R,
    out: &mut W,
) -> Result<String> {
    if let Some(name) = company {
        return Ok(company_or_default(&name));
    }

    write!(
        out,
        "Enter the company name (or press Enter for '{}'): ",
        DEFAULT_COMPANY
    )?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(company_or_default(&line))
}

/// Full interactive run. Only I/O failures on `input`/`out` surface as `Err`.
pub async fn run<S, F, R, W>(
    config: Result<Config, ConfigError>,
    connect: F,
    company: Option<String>,
    input: &mut R,
    out: &mut W,
) -> Result<SearchOutcome>
where
    S: WebSearch,
    F: FnOnce(&Config) -> S,
    R: BufRead,
    W: Write,
{
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            warn!("{}", e);
            report::print_config_error(out, &e)?;
            return Ok(SearchOutcome::Config(e));
        }
    };

    let company = resolve_company(company, input, out)?;
    writeln!(out, "\n🔍 Searching for HR profiles at {}...", company)?;

    let search = connect(&config);
    let query = build_query(&company);
    writeln!(out, "Executing search with query: {}\n", query)?;
    out.flush()?;

    match find_profiles(&search, &query).await {
        Ok(profiles) => {
            report::print_profiles(out, &company, &profiles)?;
            Ok(SearchOutcome::Profiles(profiles))
        }
        Err(e) => {
            warn!("Search failed for {}: {}", company, e);
            report::print_search_error(out, &e)?;
            Ok(SearchOutcome::Search(e))
        }
    }
}
