//! Command parsing and execution for the scorebook binary
//!
//! Usage:
//!   scorebook show <results.json>        Print the result tables
//!   scorebook export <results.json>      Write workbook, CSV and chart
//!   scorebook thumbs <paths...>          Generate thumbnails
//!
//! Options:
//!   --json               Output show data in JSON format
//!   --only <kind>        Export a single artifact: xlsx, csv or chart
//!   --xlsx/--csv/--chart <path>   Override an export destination
//!   --out <dir>          Thumbnail output directory

use std::path::{Path, PathBuf};

use scorebook_core::{
    intake, write_chart, write_csv, write_workbook, Config, PlayerSummaries, ResultsStore,
    ScoreAnalyzer, Thumbnailer,
};

/// Which export artifacts to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportSelection {
    All,
    Xlsx,
    Csv,
    Chart,
}

/// CLI command to execute
#[derive(Debug, Clone)]
pub enum CliCommand {
    Show {
        input: PathBuf,
        json: bool,
    },
    Export {
        input: PathBuf,
        selection: ExportSelection,
        xlsx: Option<PathBuf>,
        csv: Option<PathBuf>,
        chart: Option<PathBuf>,
    },
    Thumbs {
        inputs: Vec<String>,
        out: Option<PathBuf>,
    },
}

/// Parse CLI arguments into a command
pub fn parse_args(args: &[String]) -> Result<CliCommand, String> {
    let command = args.first().ok_or("No command specified")?;
    match command.as_str() {
        "show" => {
            let mut input: Option<PathBuf> = None;
            let mut json = false;
            for arg in &args[1..] {
                match arg.as_str() {
                    "--json" => json = true,
                    other if !other.starts_with('-') && input.is_none() => {
                        input = Some(PathBuf::from(other))
                    }
                    other => return Err(format!("Unexpected argument: {}", other)),
                }
            }
            let input = input.ok_or("show requires a results JSON path")?;
            Ok(CliCommand::Show { input, json })
        }
        "export" => {
            let mut input: Option<PathBuf> = None;
            let mut selection = ExportSelection::All;
            let mut xlsx = None;
            let mut csv = None;
            let mut chart = None;

            let mut i = 1;
            while i < args.len() {
                match args[i].as_str() {
                    "--only" => {
                        i += 1;
                        let value = args.get(i).ok_or("--only requires a value")?;
                        selection = parse_selection(value)?;
                    }
                    "--xlsx" => {
                        i += 1;
                        xlsx = Some(PathBuf::from(args.get(i).ok_or("--xlsx requires a path")?));
                    }
                    "--csv" => {
                        i += 1;
                        csv = Some(PathBuf::from(args.get(i).ok_or("--csv requires a path")?));
                    }
                    "--chart" => {
                        i += 1;
                        chart = Some(PathBuf::from(args.get(i).ok_or("--chart requires a path")?));
                    }
                    other if !other.starts_with('-') && input.is_none() => {
                        input = Some(PathBuf::from(other))
                    }
                    other => return Err(format!("Unexpected argument: {}", other)),
                }
                i += 1;
            }
            let input = input.ok_or("export requires a results JSON path")?;
            Ok(CliCommand::Export {
                input,
                selection,
                xlsx,
                csv,
                chart,
            })
        }
        "thumbs" => {
            let mut out: Option<PathBuf> = None;
            let mut inputs: Vec<String> = Vec::new();

            let mut i = 1;
            while i < args.len() {
                match args[i].as_str() {
                    "--out" => {
                        i += 1;
                        out = Some(PathBuf::from(
                            args.get(i).ok_or("--out requires a directory")?,
                        ));
                    }
                    other => inputs.push(other.to_string()),
                }
                i += 1;
            }
            if inputs.is_empty() {
                return Err("thumbs requires at least one path".to_string());
            }
            Ok(CliCommand::Thumbs { inputs, out })
        }
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn parse_selection(value: &str) -> Result<ExportSelection, String> {
    match value {
        "xlsx" => Ok(ExportSelection::Xlsx),
        "csv" => Ok(ExportSelection::Csv),
        "chart" => Ok(ExportSelection::Chart),
        other => Err(format!(
            "Invalid export selection '{}'. Use: xlsx, csv, or chart",
            other
        )),
    }
}

pub fn print_help() {
    println!("scorebook v{}", env!("CARGO_PKG_VERSION"));
    println!("Collect game scores and export per-game and per-player statistics");
    println!();
    println!("USAGE:");
    println!("    scorebook show <results.json> [--json]");
    println!("    scorebook export <results.json> [--only xlsx|csv|chart]");
    println!("                     [--xlsx PATH] [--csv PATH] [--chart PATH]");
    println!("    scorebook thumbs <paths...> [--out DIR]");
    println!();
    println!("COMMANDS:");
    println!("    show      Print the game table and the totals/averages table");
    println!("    export    Write the spreadsheet workbook, CSV file and chart image");
    println!("    thumbs    Generate bounded thumbnails for image files;");
    println!("              arguments may be plain paths or raw drag-and-drop payloads");
    println!();
    println!("Export destinations default to the configured paths");
    println!("(game_results.xlsx, game_results.csv, player_results.png).");
}

/// Run a parsed command
pub fn run(command: CliCommand) -> anyhow::Result<()> {
    match command {
        CliCommand::Show { input, json } => run_show(&input, json),
        CliCommand::Export {
            input,
            selection,
            xlsx,
            csv,
            chart,
        } => run_export(&input, selection, xlsx, csv, chart),
        CliCommand::Thumbs { inputs, out } => run_thumbs(&inputs, out),
    }
}

fn run_show(input: &Path, json: bool) -> anyhow::Result<()> {
    let store = ResultsStore::load(input)?;
    let summaries = ScoreAnalyzer::summarize(store.records());

    if json {
        let document = serde_json::json!({
            "games": store.records(),
            "summaries": &summaries,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    print_games_table(&store);
    println!();
    print_summary_table(&summaries);
    Ok(())
}

fn print_games_table(store: &ResultsStore) {
    println!("{:<12}  {}", "Game Number", "Player Scores");
    for game in store.iter() {
        println!("{:<12}  {}", game.game_number, game.player_scores_line());
    }
}

fn print_summary_table(summaries: &PlayerSummaries) {
    let name_width = summaries
        .iter()
        .map(|s| s.player_name.len())
        .max()
        .unwrap_or(0)
        .max("Player".len());

    println!(
        "{:<width$}  {:>12}  {:>8}",
        "Player",
        "Total Score",
        "Average",
        width = name_width
    );
    for summary in summaries {
        println!(
            "{:<width$}  {:>12}  {:>8}",
            summary.player_name,
            summary.total_score.to_string(),
            summary.average_score,
            width = name_width
        );
    }
}

fn run_export(
    input: &Path,
    selection: ExportSelection,
    xlsx: Option<PathBuf>,
    csv: Option<PathBuf>,
    chart: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = Config::load();
    let store = ResultsStore::load(input)?;
    let summaries = ScoreAnalyzer::summarize(store.records());
    tracing::debug!(
        "exporting {} games, {} players",
        store.len(),
        summaries.len()
    );

    let mut failures = 0usize;

    if matches!(selection, ExportSelection::All | ExportSelection::Xlsx) {
        let path = xlsx.unwrap_or_else(|| config.workbook_path.clone());
        report(
            "spreadsheet",
            &path,
            write_workbook(store.records(), &summaries, &path),
            &mut failures,
        );
    }
    if matches!(selection, ExportSelection::All | ExportSelection::Csv) {
        let path = csv.unwrap_or_else(|| config.csv_path.clone());
        report(
            "CSV",
            &path,
            write_csv(store.records(), &summaries, &path),
            &mut failures,
        );
    }
    if matches!(selection, ExportSelection::All | ExportSelection::Chart) {
        let path = chart.unwrap_or_else(|| config.chart_path.clone());
        report(
            "chart",
            &path,
            write_chart(store.records(), &path),
            &mut failures,
        );
    }

    if failures > 0 {
        anyhow::bail!("{} export(s) failed", failures);
    }
    Ok(())
}

fn report(kind: &str, path: &Path, result: scorebook_core::Result<()>, failures: &mut usize) {
    match result {
        Ok(()) => println!("Saved {} to {}", kind, path.display()),
        Err(e) => {
            eprintln!("Failed to save {}: {}", kind, e);
            *failures += 1;
        }
    }
}

fn run_thumbs(inputs: &[String], out: Option<PathBuf>) -> anyhow::Result<()> {
    let config = Config::load();
    let out = out.unwrap_or(config.thumbnail_dir);

    // Each argument may be a plain path or a whole drop payload
    let paths: Vec<PathBuf> = inputs
        .iter()
        .flat_map(|arg| intake::extract_paths(arg))
        .map(PathBuf::from)
        .collect();
    if paths.is_empty() {
        anyhow::bail!("no input paths given");
    }

    let result = Thumbnailer::new(&out).generate(&paths)?;
    println!(
        "Generated {} thumbnail(s) in {}",
        result.generated.len(),
        out.display()
    );
    if result.skipped > 0 {
        println!("Skipped {} non-image or missing file(s)", result.skipped);
    }
    for (path, message) in &result.errors {
        eprintln!("Failed on {}: {}", path.display(), message);
    }
    if !result.errors.is_empty() {
        anyhow::bail!("{} file(s) failed", result.errors.len());
    }
    Ok(())
}
