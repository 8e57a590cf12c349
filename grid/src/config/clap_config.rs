// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};

use crate::{DEFAULT_PAGE_SIZE, EVENT_IDENTITY_FIELD, EVENT_LIST_ENDPOINT, RequestStyle};

/// Read once at startup. `--base-url` wins over it.
pub const BASE_URL_ENV_VAR: &str = "GRID_API_BASE_URL";

pub const DEFAULT_COMPANY_ID: &str = "2";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "grid")]
#[command(about = "🗂️ Browse the records of a remote list endpoint, page by page 📑")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  grid [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(
        long,
        short = 'e',
        default_value = EVENT_LIST_ENDPOINT,
        help = "Path of the list endpoint, joined onto the base URL. An absolute `http(s)://` URL is used as is"
    )]
    pub endpoint: String,

    #[arg(
        long,
        short = 'b',
        env = BASE_URL_ENV_VAR,
        help = "Base URL of the API server, eg: `http://localhost:8080`"
    )]
    pub base_url: Option<String>,

    #[arg(
        long,
        short = 'c',
        default_value = DEFAULT_COMPANY_ID,
        help = "Only show records of this company. Pass an empty string to send no filter"
    )]
    pub company_id: String,

    #[arg(long, short = 's', default_value_t = DEFAULT_PAGE_SIZE, help = "Records per page")]
    pub page_size: usize,

    #[arg(
        long,
        short = 'm',
        value_enum,
        default_value_t = RequestStyle::PostJson,
        help = "Send the list parameters as a JSON body (post), or as query params (get)"
    )]
    pub method: RequestStyle,

    #[arg(
        long,
        short = 'i',
        default_value = EVENT_IDENTITY_FIELD,
        help = "Record field that is unique within a page"
    )]
    pub id_field: String,

    #[arg(
        long,
        help = "Records have no unique field, use the row position as their identity"
    )]
    pub no_id_field: bool,

    #[arg(
        long = "column",
        value_name = "FIELD[:HEADER]",
        help = "Column to show, repeat for more columns. Defaults to the CCTV event columns"
    )]
    pub columns: Vec<String>,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, help = "Request timeout, in seconds")]
    pub timeout_secs: u64,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_defaults() {
        unsafe {
            std::env::remove_var(BASE_URL_ENV_VAR);
        }
        let it = CLIArg::try_parse_from(["grid"]).unwrap();
        assert_eq!(it.endpoint, EVENT_LIST_ENDPOINT);
        assert_eq!(it.base_url, None);
        assert_eq!(it.company_id, "2");
        assert_eq!(it.page_size, 10);
        assert_eq!(it.method, RequestStyle::PostJson);
        assert_eq!(it.id_field, EVENT_IDENTITY_FIELD);
        assert!(!it.no_id_field);
        assert!(it.columns.is_empty());
        assert!(!it.global_options.enable_logging);
    }

    #[test]
    #[serial]
    fn test_base_url_from_env_and_flag() {
        unsafe {
            std::env::set_var(BASE_URL_ENV_VAR, "http://from-env:8080");
            let it = CLIArg::try_parse_from(["grid"]).unwrap();
            assert_eq!(it.base_url.as_deref(), Some("http://from-env:8080"));

            let it =
                CLIArg::try_parse_from(["grid", "--base-url", "http://from-flag"]).unwrap();
            assert_eq!(it.base_url.as_deref(), Some("http://from-flag"));
            std::env::remove_var(BASE_URL_ENV_VAR);
        }
    }

    #[test]
    #[serial]
    fn test_flags() {
        let it = CLIArg::try_parse_from([
            "grid",
            "-m",
            "get",
            "-s",
            "20",
            "--column",
            "cctvName:CCTV Name",
            "--column",
            "regDate",
            "-l",
        ])
        .unwrap();
        assert_eq!(it.method, RequestStyle::GetQuery);
        assert_eq!(it.page_size, 20);
        assert_eq!(it.columns, vec!["cctvName:CCTV Name", "regDate"]);
        assert!(it.global_options.enable_logging);
    }
}
