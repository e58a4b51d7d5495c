use clap::{Arg, Command};
use log::{error, LevelFilter};
use serde::Serialize;
use serde_json::Value;

use exhume_parquet::html::generate_html_report;
use exhume_parquet::{
    find_footer_segment, get_pages, get_summary, parse_parquet_file, segment_to_json, Summary,
};

#[derive(Serialize)]
struct DefaultOutput {
    summary: Summary,
    footer: Value,
    pages: Value,
}

fn main() {
    let matches = Command::new("exhume_parquet")
        .version("0.1.2")
        .author("ForensicXlab")
        .about("Maps every byte of a Parquet file to a named, typed segment.")
        .arg(
            Arg::new("file")
                .value_parser(clap::value_parser!(String))
                .required(true)
                .help("The path to the Parquet file to inspect."),
        )
        .arg(
            Arg::new("output-mode")
                .short('o')
                .long("output-mode")
                .value_parser(["default", "segments", "html"])
                .default_value("default")
                .help("'default' prints summary/footer/pages JSON, 'segments' the raw segment list, 'html' a rendered report."),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .default_value("info")
                .help("Set the logging verbosity."),
        )
        .get_matches();

    let file_path = matches.get_one::<String>("file").unwrap();
    let output_mode = matches.get_one::<String>("output-mode").unwrap();
    let log_level = match matches.get_one::<String>("log-level").unwrap().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::new().filter_level(log_level).init();

    let (segments, column_offsets) = match parse_parquet_file(file_path) {
        Ok(parsed) => parsed,
        Err(err) => {
            error!("Error: {}", err);
            std::process::exit(1);
        }
    };

    match output_mode.as_str() {
        "segments" => match serde_json::to_string_pretty(&segments) {
            Ok(rendered) => println!("{}", rendered),
            Err(err) => {
                error!("Error: {}", err);
                std::process::exit(1);
            }
        },
        mode => {
            let Some(footer) = find_footer_segment(&segments) else {
                error!("Error: no footer segment in the parsed file");
                std::process::exit(1);
            };
            let footer_json = segment_to_json(footer);
            let summary = get_summary(&footer_json, &segments);
            if mode == "html" {
                println!(
                    "{}",
                    generate_html_report(file_path, &summary, footer, &segments)
                );
            } else {
                let output = DefaultOutput {
                    summary,
                    footer: footer_json,
                    pages: get_pages(&segments, &column_offsets),
                };
                match serde_json::to_string_pretty(&output) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(err) => {
                        error!("Error: {}", err);
                        std::process::exit(1);
                    }
                }
            }
        }
    }
}
