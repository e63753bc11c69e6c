// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Weft CLI entrypoint.
//!
//! By default this runs the interactive TUI. `--print <format>` computes the
//! composite headlessly and writes it to stdout instead: `csv` (occupied
//! values), `python` (list literal with `None` markers), `json` (the raw
//! window) or `strip` (one-line mark strip).

use std::error::Error;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--rows <n>] [--window <w>] [--print csv|python|json|strip]\n  {program} --demo [--print csv|python|json|strip]\n\nTUI mode (default) edits rows interactively; queued exports print on quit.\n--rows sets the visible row count (1..=50, default 10).\n--window sets the materialization width (default 1000).\n--demo starts from a built-in varied session and cannot be combined with --rows/--window.\n--print skips the TUI and writes the interleaved composite to stdout."
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrintFormat {
    Csv,
    Python,
    Json,
    Strip,
}

impl PrintFormat {
    fn parse(raw: &str) -> Result<Self, ()> {
        match raw {
            "csv" => Ok(Self::Csv),
            "python" => Ok(Self::Python),
            "json" => Ok(Self::Json),
            "strip" => Ok(Self::Strip),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CliOptions {
    rows: Option<u32>,
    window: Option<usize>,
    print: Option<PrintFormat>,
    demo: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--rows" => {
                if options.rows.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let rows: u32 = raw.parse().map_err(|_| ())?;
                options.rows = Some(rows);
            }
            "--window" => {
                if options.window.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let window: usize = raw.parse().map_err(|_| ())?;
                if window == 0 {
                    return Err(());
                }
                options.window = Some(window);
            }
            "--print" => {
                if options.print.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.print = Some(PrintFormat::parse(&raw)?);
            }
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            _ => return Err(()),
        }
    }

    if options.demo && (options.rows.is_some() || options.window.is_some()) {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "weft".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let session = if options.demo {
            weft::tui::demo_session()
        } else {
            let mut session = weft::model::Session::new();
            if let Some(rows) = options.rows {
                session = session.with_row_count(rows);
            }
            if let Some(window) = options.window {
                session = session.with_window_width(window);
            }
            session
        };

        if let Some(format) = options.print {
            let composite = weft::ops::compute_composite(&session);
            match format {
                PrintFormat::Csv => println!("{}", weft::render::csv_values(&composite)),
                PrintFormat::Python => println!(
                    "{}",
                    weft::render::literal_list(weft::render::COMPOSITE_LIST_NAME, &composite)
                ),
                PrintFormat::Json => println!("{}", serde_json::to_string(&composite)?),
                PrintFormat::Strip => println!("{}", weft::render::strip(&composite)),
            }
            return Ok(());
        }

        weft::tui::run_with_session(session)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("weft: {err}");
        std::process::exit(1);
    }
}
