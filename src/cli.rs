//! Command line front end.
//!
//! Parses arguments and dispatches to single, batch or interactive mode.

use crate::models::SubnetInfo;
use crate::output::{explain, print_ranges, print_report, render_report, subnet_print, Topic};
use crate::processing::{read_batch, split_request, Request, Session};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::error::Error;
use std::io::{BufRead, Write};

/// Default location of the log4rs configuration.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Parser, Debug)]
#[command(version, about = "subnet-calc - IPv4 subnet calculator with explanations")]
pub struct Args {
    /// Requests as a.b.c.d/prefix, or a.b.c.d for the classful default prefix.
    pub requests: Vec<String>,

    /// Prefix used for requests given without one.
    #[arg(short, long)]
    pub prefix: Option<i64>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Explain a value: class, network, broadcast, first, last, mask, hosts or all.
    #[arg(short, long)]
    pub explain: Option<String>,

    /// List the ranges of the same size in the last octet.
    #[arg(short, long)]
    pub ranges: bool,

    /// JSON file with an array of {"address", "prefix_length"} requests.
    #[arg(short, long)]
    pub batch: Option<String>,

    /// Read requests from stdin, keeping the last valid result on bad input.
    #[arg(short, long)]
    pub interactive: bool,

    /// log4rs configuration file.
    #[arg(long, env = "SUBNET_CALC_LOG_CONFIG", default_value = DEFAULT_LOG_CONFIG)]
    pub log_config: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Csv,
    Json,
}

/// Topics selected by the `--explain` value.
pub fn parse_topics(value: &str) -> Result<Vec<Topic>, String> {
    if value.trim().eq_ignore_ascii_case("all") {
        return Ok(Topic::all().to_vec());
    }
    value.split(',').map(str::parse).collect()
}

/// Run the command described by `args`.
pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let topics = match &args.explain {
        Some(value) => parse_topics(value)?,
        None => vec![],
    };

    if args.interactive {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        return run_interactive(stdin.lock(), stdout.lock(), args.prefix);
    }

    let mut requests = match &args.batch {
        Some(path) => read_batch(path)?,
        None => vec![],
    };
    for text in &args.requests {
        requests.push(split_request(text)?);
    }
    if requests.is_empty() {
        return Err("no request given, try --help".into());
    }

    let results = compute_all(&requests, args.prefix)?;
    match args.format {
        Format::Text => {
            for (i, info) in results.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_report(info);
                if args.ranges {
                    print_ranges(info);
                }
                for topic in &topics {
                    println!("\n{}\n{}", topic.to_string().on_blue(), explain(*topic, info));
                }
            }
        }
        Format::Csv => subnet_print(&results),
        Format::Json => println!("{}", serde_json::to_string_pretty(&results)?),
    }
    Ok(())
}

/// Compute every request, stopping at the first invalid one.
pub fn compute_all(
    requests: &[Request],
    fallback_prefix: Option<i64>,
) -> Result<Vec<SubnetInfo>, Box<dyn Error>> {
    requests
        .iter()
        .enumerate()
        .map(|(i, req)| {
            req.compute(fallback_prefix).map_err(|e| {
                log::error!("Request {i} failed: {e}");
                Box::<dyn Error>::from(format!("request {} ({}): {e}", i + 1, req.address))
            })
        })
        .collect()
}

const INTERACTIVE_HELP: &str = "enter a.b.c.d[/prefix], 'default' for the class default prefix, \
'explain <topic>', 'ranges' or 'quit'";

/// Line based session: each line updates the result, invalid lines keep the
/// previous one.
pub fn run_interactive<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    fallback_prefix: Option<i64>,
) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new();
    writeln!(out, "{INTERACTIVE_HELP}")?;

    for line in input.lines() {
        let line = line?;
        let (command, rest) = line
            .trim()
            .split_once(' ')
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((line.trim(), ""));

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => writeln!(out, "{INTERACTIVE_HELP}")?,
            "default" => match session.apply_default_prefix() {
                Some(info) => write_report(&mut out, info)?,
                None => writeln!(out, "no default prefix available")?,
            },
            "explain" => match (session.current(), rest.parse::<Topic>()) {
                (Some(info), Ok(topic)) => writeln!(out, "{}", explain(topic, info))?,
                (None, _) => writeln!(out, "no result yet")?,
                (_, Err(e)) => writeln!(out, "{e}")?,
            },
            "ranges" => match session.current() {
                Some(info) => {
                    for (start, end) in info.sibling_ranges() {
                        writeln!(out, "{start} - {end}")?;
                    }
                }
                None => writeln!(out, "no result yet")?,
            },
            _ => {
                let update = split_request(&line).and_then(|req| {
                    let prefix = match req.prefix_length.or(fallback_prefix) {
                        Some(prefix) => prefix,
                        None => crate::processing::default_prefix_for(&req.address)?,
                    };
                    Ok((req.address, prefix))
                });
                let result = match update {
                    Ok((address, prefix)) => session.update(&address, prefix).map(|_| ()),
                    Err(e) => Err(e),
                };
                match (result, session.current()) {
                    (Ok(()), Some(info)) => write_report(&mut out, info)?,
                    (Err(e), Some(info)) => {
                        writeln!(out, "{e}, keeping {info}")?;
                    }
                    (Err(e), None) => writeln!(out, "{e}")?,
                    (Ok(()), None) => {}
                }
            }
        }
    }
    log::info!("Interactive session ended, {} input(s) rejected", session.rejected());
    Ok(())
}

fn write_report<W: Write>(out: &mut W, info: &SubnetInfo) -> std::io::Result<()> {
    for line in render_report(info) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_topics() {
        assert_eq!(parse_topics("all").unwrap().len(), 7);
        assert_eq!(
            parse_topics("class,hosts").unwrap(),
            vec![Topic::AddressClass, Topic::NumHosts]
        );
        assert!(parse_topics("class,bogus").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "subnet-calc",
            "192.168.1.10/24",
            "10.0.0.1",
            "-p",
            "16",
            "--format",
            "csv",
            "-r",
        ])
        .unwrap();
        assert_eq!(args.requests, vec!["192.168.1.10/24", "10.0.0.1"]);
        assert_eq!(args.prefix, Some(16));
        assert_eq!(args.format, Format::Csv);
        assert!(args.ranges);
        assert!(!args.interactive);
    }

    #[test]
    fn test_compute_all() {
        let requests = vec![
            split_request("192.168.1.10/24").unwrap(),
            split_request("10.0.0.1").unwrap(),
        ];
        let results = compute_all(&requests, None).unwrap();
        assert_eq!(results[1].prefix_length, 8);

        let results = compute_all(&requests, Some(30)).unwrap();
        assert_eq!(results[0].prefix_length, 24);
        assert_eq!(results[1].prefix_length, 30);

        let requests = vec![split_request("10.0.0.300/24").unwrap()];
        let err = compute_all(&requests, None).unwrap_err().to_string();
        assert!(err.starts_with("request 1 (10.0.0.300)"), "{err}");
    }

    #[test]
    fn test_run_interactive_keeps_last_valid() {
        colored::control::set_override(false);
        let input = "192.168.1.10/24\n192.168.1.\ndefault\n10.0.0.1 40\nexplain hosts\nquit\n10.0.0.1/8\n";
        let mut out = Vec::new();
        run_interactive(input.as_bytes(), &mut out, None).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("192.168.1.0/24"));
        assert!(text.contains("keeping 192.168.1.0/24"));
        assert!(text.contains("invalid prefix length 40"));
        assert!(text.contains("2^8 - 2 = 254"));
        // stopped at quit
        assert!(!text.contains("10.0.0.0/8"));
    }
}
