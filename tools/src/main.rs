//! verteilomat-runner: headless driver for the income-impact core.
//!
//! Usage:
//!   verteilomat-runner --bracket 1-10k --metric absolute --hover AfD
//!   verteilomat-runner --income 42000 --metric percentage
//!   verteilomat-runner --ipc-mode [--data dataset.json]
//!   verteilomat-runner --dump-data > dataset.json

use anyhow::Result;
use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use verteilomat_core::{
    bracket::IncomeBracket,
    captions::impact_sentence,
    command::SelectionCommand,
    dataset::ImpactDataset,
    palette::PartyPalette,
    query::ImpactQuery,
    ranking::{ChartRecord, Metric},
    session::Session,
};

const BAR_WIDTH: f64 = 40.0;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcRequest {
    GetState,
    ListBrackets,
    Command { command: SelectionCommand },
    Quit,
}

#[derive(serde::Serialize)]
struct BracketOption<'a> {
    label:        &'a str,
    option_label: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let dump_data = args.iter().any(|a| a == "--dump-data");
    let data_path = string_arg(&args, "--data");

    let dataset = match data_path {
        Some(path) => Arc::new(ImpactDataset::load(path)?),
        None => ImpactDataset::reference(),
    };

    if dump_data {
        println!("{}", dataset.to_json_pretty()?);
        return Ok(());
    }

    let query = ImpactQuery::new(dataset, Arc::new(PartyPalette::reference()));
    let mut session = Session::new(query);

    if ipc_mode {
        run_ipc_loop(&mut session)
    } else {
        run_summary(&mut session, &args)
    }
}

fn run_ipc_loop(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("unparseable request: {e}");
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        match request {
            IpcRequest::Quit => break,
            IpcRequest::GetState => write_view(&mut stdout, session)?,
            IpcRequest::ListBrackets => {
                let options: Vec<_> = session
                    .query()
                    .list_brackets()
                    .iter()
                    .map(|b| BracketOption { label: &b.label, option_label: b.option_label() })
                    .collect();
                writeln!(stdout, "{}", serde_json::to_string(&options)?)?;
            }
            IpcRequest::Command { command } => match session.apply(&command) {
                Ok(()) => write_view(&mut stdout, session)?,
                Err(e) => {
                    log::warn!("command {} rejected: {e}", command.name());
                    write_error(&mut stdout, &e.to_string())?;
                }
            },
        }
        stdout.flush()?;
    }
    Ok(())
}

fn write_view(out: &mut impl Write, session: &Session) -> Result<()> {
    let view = session.view()?;
    writeln!(out, "{}", serde_json::to_string(&view)?)?;
    Ok(())
}

fn write_error(out: &mut impl Write, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(out, "{}", err_json)?;
    out.flush()?;
    Ok(())
}

fn run_summary(session: &mut Session, args: &[String]) -> Result<()> {
    let metric = match string_arg(args, "--metric") {
        Some(m) => m.parse::<Metric>().map_err(anyhow::Error::msg)?,
        None => Metric::Absolute,
    };
    session.set_metric(metric);

    let bracket = match (string_arg(args, "--bracket"), parse_arg::<u64>(args, "--income")?) {
        (Some(label), _) => Some(label.to_string()),
        (None, Some(income)) => session
            .query()
            .dataset()
            .bracket_for_income(income)
            .map(|b| b.label.clone()),
        (None, None) => None,
    };

    let Some(bracket) = bracket else {
        println!("Income brackets:");
        for b in session.query().list_brackets() {
            println!("  {:<10} {}", b.label, b.option_label());
        }
        println!();
        println!("Pick one with --bracket <label> or --income <amount>.");
        return Ok(());
    };

    session.choose_bracket(&bracket)?;
    if let Some(party) = string_arg(args, "--hover") {
        session.hover_party(Some(party))?;
    }

    let view = session.view()?;
    print_header(session, &bracket);
    println!("  {}", view.axis_caption);
    println!();
    print_bars(&view.chart, session.query().palette());
    println!();
    if let Some(top) = view.chart.first() {
        println!("  {}", impact_sentence(top, metric));
    }
    if let Some(poverty) = view.poverty {
        println!();
        println!("  {}", poverty.headline);
    }
    Ok(())
}

fn print_header(session: &Session, bracket: &str) {
    let range = session
        .query()
        .list_brackets()
        .iter()
        .find(|b| b.label == bracket)
        .map(IncomeBracket::option_label)
        .unwrap_or_default();
    println!("Verteil-O-Mat: Haushaltsbruttoeinkommen {range}");
    println!();
}

fn print_bars(chart: &[ChartRecord], palette: &PartyPalette) {
    let scale = chart.iter().map(|r| r.value.abs()).fold(0.0_f64, f64::max);
    for record in chart {
        let len = if scale > 0.0 {
            (record.value.abs() / scale * BAR_WIDTH).round() as usize
        } else {
            0
        };
        let glyph = if record.value < 0.0 { '-' } else { '#' };
        println!(
            "  {:<11} {:>9} {}",
            palette.label(&record.party),
            record.value,
            glyph.to_string().repeat(len)
        );
    }
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// `Ok(None)` if the flag is absent; an error if its value does not parse.
fn parse_arg<T>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    string_arg(args, flag)
        .map(|v| v.parse().map_err(|e| anyhow::anyhow!("Invalid value '{v}' for {flag}: {e}")))
        .transpose()
}
