//! Command execution.

use helper_kit::{
    SlugOptions, TokenCodec, humanize_bytes, normalize_phone, paginate, pluralize, slugify,
    time_ago, time_more, timestamp_from_unix,
};
use mockable::Clock;
use tracing::debug;

use crate::cli::{Command, PaginateArgs, PhoneArgs};
use crate::config::HelperKitSettings;
use crate::error::CliError;

/// Run `command` and return the line to print.
///
/// Flags take precedence over `settings`; `clock` anchors `ago` and `more`.
///
/// # Errors
///
/// Returns [`CliError::Format`] when the helper rejects its input: a phone
/// number of the wrong length, an unrepresentable timestamp or a malformed
/// token.
pub fn execute(
    command: &Command,
    settings: &HelperKitSettings,
    clock: &dyn Clock,
) -> Result<String, CliError> {
    debug!(?command, "running helper");
    match command {
        Command::Phone(args) => run_phone(args, settings),
        Command::Slug(args) => Ok(slugify(
            &args.text,
            SlugOptions {
                cap_length: !args.uncapped,
            },
        )),
        Command::Ago(args) => Ok(time_ago(clock, timestamp_from_unix(args.timestamp)?)),
        Command::More(args) => Ok(time_more(clock, timestamp_from_unix(args.timestamp)?)),
        Command::Bytes(args) => Ok(humanize_bytes(args.count).to_string()),
        Command::Plural(args) => Ok(pluralize(&args.noun, args.count)),
        Command::TokenEncode(args) => {
            let salt_length = args.salt_length.unwrap_or_else(|| settings.salt_length());
            Ok(TokenCodec::new(salt_length).encode(&args.payload))
        }
        Command::TokenDecode(args) => {
            let salt_length = args.salt_length.unwrap_or_else(|| settings.salt_length());
            TokenCodec::new(salt_length)
                .decode(&args.token)
                .map_err(CliError::from)
        }
        Command::Paginate(args) => Ok(run_paginate(args, settings)),
    }
}

fn run_phone(args: &PhoneArgs, settings: &HelperKitSettings) -> Result<String, CliError> {
    let country_code = args
        .country_code
        .as_deref()
        .or(settings.country_code.as_deref());
    let replace_prefix = args
        .replace_prefix
        .as_deref()
        .or(settings.replace_prefix.as_deref());
    let digits = normalize_phone(&args.number, country_code, replace_prefix).into_result()?;
    Ok(digits)
}

fn run_paginate(args: &PaginateArgs, settings: &HelperKitSettings) -> String {
    let defaults = settings.pagination();
    let pagination = paginate(
        args.rows,
        args.page,
        args.page_size.unwrap_or(defaults.page_size),
        args.max_page_size.unwrap_or(defaults.max_page_size),
    );
    format!(
        "total_pages={} row_offset={}",
        pagination.total_pages, pagination.row_offset
    )
}

#[cfg(test)]
mod tests {
    //! Unit tests for command execution against a fixed clock.

    use chrono::{DateTime, Local, TimeZone, Utc};
    use clap::Parser;
    use helper_kit::FormatError;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::cli::Cli;

    /// 2026-10-19T12:00:00Z.
    const NOW: i64 = 1_792_411_200;

    struct FixtureClock;

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            Utc.timestamp_opt(NOW, 0)
                .single()
                .expect("valid fixture timestamp")
        }
    }

    #[fixture]
    fn settings() -> HelperKitSettings {
        HelperKitSettings::default()
    }

    fn run(args: &[&str], settings: &HelperKitSettings) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("helper-kit").chain(args.iter().copied()))
            .expect("arguments should parse");
        execute(&cli.command, settings, &FixtureClock)
    }

    #[rstest]
    #[case(
        &[
            "phone",
            "0812-3456-7890",
            "--country-code",
            "62",
            "--replace-prefix",
            "0",
        ],
        "6281234567890"
    )]
    #[case(
        &[
            "phone",
            "0812-3456-7890",
            "--country-code",
            "+62",
            "--replace-prefix",
            "0",
        ],
        "6281234567890"
    )]
    #[case(&["slug", "Café día"], "cafe-dia")]
    #[case(&["bytes", "1536"], "1.5 KB")]
    #[case(&["plural", "knife", "2"], "knives")]
    #[case(&["plural", "knife", "-1"], "knife")]
    #[case(
        &[
            "paginate",
            "--rows",
            "95",
            "--page",
            "2",
            "--page-size",
            "30",
        ],
        "total_pages=4 row_offset=30"
    )]
    fn prints_helper_output(
        settings: HelperKitSettings,
        #[case] args: &[&str],
        #[case] expected: &str,
    ) {
        assert_eq!(run(args, &settings).expect("command succeeds"), expected);
    }

    #[rstest]
    fn describes_timestamps_against_the_clock(settings: HelperKitSettings) {
        let past = (NOW - 3 * 3_600).to_string();
        let future = (NOW + 3_600).to_string();
        assert_eq!(run(&["ago", &past], &settings).expect("ago"), "3 hours ago");
        assert_eq!(run(&["more", &future], &settings).expect("more"), "1 hour more");
        assert_eq!(run(&["more", &past], &settings).expect("more"), "0");
    }

    #[rstest]
    fn settings_supply_phone_defaults() {
        let settings = HelperKitSettings {
            country_code: Some("62".to_owned()),
            replace_prefix: Some("0".to_owned()),
            ..HelperKitSettings::default()
        };
        assert_eq!(
            run(&["phone", "081234567890"], &settings).expect("phone"),
            "6281234567890"
        );
    }

    #[rstest]
    fn settings_supply_pagination_defaults() {
        let settings = HelperKitSettings {
            page_size: Some(10),
            max_page_size: Some(20),
            ..HelperKitSettings::default()
        };
        assert_eq!(
            run(&["paginate", "--rows", "95", "--page", "3"], &settings).expect("paginate"),
            "total_pages=10 row_offset=20"
        );
        assert_eq!(
            run(&["paginate", "--rows", "95", "--page-size", "50"], &settings)
                .expect("paginate"),
            "total_pages=5 row_offset=0"
        );
    }

    #[rstest]
    fn tokens_round_trip_with_configured_salt_length() {
        let settings = HelperKitSettings {
            salt_length: Some(4),
            ..HelperKitSettings::default()
        };
        let token = run(&["token-encode", "order:1042"], &settings).expect("encode");
        assert_eq!(
            run(&["token-decode", &token], &settings).expect("decode"),
            "order:1042"
        );
        assert_eq!(
            run(&["token-decode", &token, "--salt-length", "4"], &settings).expect("decode"),
            "order:1042"
        );
    }

    #[rstest]
    fn rejects_short_phone_numbers(settings: HelperKitSettings) {
        let error = run(&["phone", "12345"], &settings).expect_err("too short");
        assert!(matches!(
            error,
            CliError::Format(FormatError::InvalidLength { length: 5 })
        ));
    }

    #[rstest]
    fn rejects_unrepresentable_timestamps(settings: HelperKitSettings) {
        let seconds = i64::MAX.to_string();
        let error = run(&["ago", &seconds], &settings).expect_err("out of range");
        assert!(matches!(
            error,
            CliError::Format(FormatError::InvalidTimestamp { .. })
        ));
    }

    #[rstest]
    fn rejects_malformed_tokens(settings: HelperKitSettings) {
        let error = run(&["token-decode", "abc"], &settings).expect_err("too short");
        assert!(matches!(
            error,
            CliError::Format(FormatError::InvalidToken { .. })
        ));
    }
}
