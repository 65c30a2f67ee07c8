//! mutant CLI — analyze DNA grids and report verdict statistics
//!
//! Commands:
//!   mutant check       — analyze rows given on the command line
//!   mutant check-file  — analyze a JSON request body from a file
//!   mutant scan        — list every qualifying sequence in a grid
//!   mutant random      — analyze a randomly generated grid
//!   mutant stats       — show mutant/human counts and ratio
//!   mutant demo        — run the documented examples

use mutant_dna::api::{error_code, DnaRequest, ErrorResponse};
use mutant_dna::{
    validate, DetectorConfig, DetectorError, JsonStore, MutantService, Scanner, ValidationError,
    VerdictStore,
};
use rand::Rng;
use std::env;
use std::process::ExitCode;

const EXIT_MUTANT: u8 = 0;
const EXIT_HUMAN: u8 = 1;
const EXIT_INVALID: u8 = 2;
const EXIT_FAILURE: u8 = 3;

fn print_usage() {
    println!(
        r#"
Mutant DNA detector

Usage: mutant <command> [options]

Commands:
  check      <row> <row> ...        Analyze a grid given as rows
  check-file <request.json>         Analyze {{"dna": [...]}} read from a file
  scan       <row> <row> ...        List every qualifying sequence
  random     [size]                 Analyze a random grid (default size 6)
  stats                             Show verdict statistics
  demo                              Run the documented examples

Exit codes: 0 mutant, 1 human, 2 invalid input, 3 other failure

Environment:
  MUTANT_CONFIG            JSON config file
  MUTANT_STORE             verdict store path (default mutant-store.json)
  MUTANT_SEQUENCE_LENGTH   window length (default 4)
  MUTANT_THRESHOLD         sequences needed for a mutant verdict (default 2)

Examples:
  mutant check ATGCGA CAGTGC TTATGT AGAAGG CCCCTA TCACTG
  mutant check-file request.json
  mutant stats
"#
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let config = match DetectorConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("  {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match args[1].as_str() {
        "check" => cmd_check(&config, &args[2..]),
        "check-file" => cmd_check_file(&config, &args[2..]),
        "scan" => cmd_scan(&config, &args[2..]),
        "random" => cmd_random(&config, &args[2..]),
        "stats" => cmd_stats(&config),
        "demo" => cmd_demo(&config),
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn load_service(config: &DetectorConfig) -> Result<MutantService<JsonStore>, ExitCode> {
    let scanner = Scanner::new(config.scanner).map_err(|e| {
        eprintln!("  {}", e);
        ExitCode::from(EXIT_FAILURE)
    })?;
    let store = JsonStore::open(&config.store_path).map_err(|e| {
        eprintln!("  Failed to open store {}: {}", config.store_path.display(), e);
        ExitCode::from(EXIT_FAILURE)
    })?;
    Ok(MutantService::with_scanner(scanner, store))
}

fn report_invalid(err: &ValidationError, path: &str) -> ExitCode {
    let response = ErrorResponse::from_validation(err, path);
    match serde_json::to_string_pretty(&response) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("  {}", err),
    }
    eprintln!("  [{}]", error_code(err.kind()));
    ExitCode::from(EXIT_INVALID)
}

fn analyze_rows(config: &DetectorConfig, rows: &[String], path: &str) -> ExitCode {
    let mut service = match load_service(config) {
        Ok(service) => service,
        Err(code) => return code,
    };

    match service.analyze(rows) {
        Ok(true) => {
            println!("MUTANT");
            ExitCode::from(EXIT_MUTANT)
        }
        Ok(false) => {
            println!("HUMAN");
            ExitCode::from(EXIT_HUMAN)
        }
        Err(DetectorError::Validation(e)) => report_invalid(&e, path),
        Err(e) => {
            eprintln!("  {}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn cmd_check(config: &DetectorConfig, args: &[String]) -> ExitCode {
    if args.is_empty() {
        eprintln!("Usage: mutant check <row> <row> ...");
        return ExitCode::from(EXIT_INVALID);
    }
    analyze_rows(config, args, "check")
}

fn cmd_check_file(config: &DetectorConfig, args: &[String]) -> ExitCode {
    let Some(path) = args.first() else {
        eprintln!("Usage: mutant check-file <request.json>");
        return ExitCode::from(EXIT_INVALID);
    };

    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("  Failed to read '{}': {}", path, e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    let request: DnaRequest = match serde_json::from_str(&data) {
        Ok(request) => request,
        Err(e) => {
            let response = ErrorResponse::bad_request(format!("Malformed request: {}", e), path.as_str());
            if let Ok(json) = serde_json::to_string_pretty(&response) {
                eprintln!("{}", json);
            }
            return ExitCode::from(EXIT_INVALID);
        }
    };

    analyze_rows(config, &request.dna, path)
}

fn cmd_scan(config: &DetectorConfig, args: &[String]) -> ExitCode {
    let grid = match validate(args) {
        Ok(grid) => grid,
        Err(e) => return report_invalid(&e, "scan"),
    };
    let scanner = match Scanner::new(config.scanner) {
        Ok(scanner) => scanner,
        Err(e) => {
            eprintln!("  {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    println!("{}\n", grid);
    let found = scanner.find_sequences(&grid);
    let window = scanner.config().sequence_length;
    for m in &found {
        println!("  {} {:<13} from ({}, {})", m.letters(window), m.direction, m.row, m.col);
    }
    println!(
        "\n  {} qualifying sequences (threshold {})",
        found.len(),
        scanner.config().mutant_threshold
    );

    if found.len() >= scanner.config().mutant_threshold {
        ExitCode::from(EXIT_MUTANT)
    } else {
        ExitCode::from(EXIT_HUMAN)
    }
}

fn cmd_random(config: &DetectorConfig, args: &[String]) -> ExitCode {
    let size: usize = args.first().and_then(|s| s.parse().ok()).unwrap_or(6).max(1);
    let mut rng = rand::thread_rng();
    let letters = ['A', 'C', 'G', 'T'];
    let rows: Vec<String> = (0..size)
        .map(|_| (0..size).map(|_| letters[rng.gen_range(0..letters.len())]).collect())
        .collect();

    for row in &rows {
        println!("  {}", row);
    }
    analyze_rows(config, &rows, "random")
}

fn cmd_stats(config: &DetectorConfig) -> ExitCode {
    let service = match load_service(config) {
        Ok(service) => service,
        Err(code) => return code,
    };
    match serde_json::to_string_pretty(&service.stats()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("  {}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn cmd_demo(config: &DetectorConfig) -> ExitCode {
    let samples: [(&str, &[&str]); 4] = [
        ("documented mutant", &["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"]),
        ("single diagonal", &["ATGC", "CAGT", "TTAT", "AGAA"]),
        ("not square", &["ATGC", "CAGT", "TTAT"]),
        ("invalid letter", &["ATGX", "CAGT", "TTAT", "AGAA"]),
    ];

    let mut service = match load_service(config) {
        Ok(service) => service,
        Err(code) => return code,
    };

    println!("\n  Mutant detection demo");
    println!("  {}", "=".repeat(40));
    for (name, rows) in samples {
        let outcome = match service.analyze(rows) {
            Ok(true) => "MUTANT".to_string(),
            Ok(false) => "HUMAN".to_string(),
            Err(DetectorError::Validation(e)) => format!("rejected: {}", e),
            Err(e) => {
                eprintln!("  {}", e);
                return ExitCode::from(EXIT_FAILURE);
            }
        };
        println!("  {:<18} {:?}\n    -> {}", name, rows, outcome);
    }

    let stats = service.stats();
    println!("\n  Store: {} records", service.store().len());
    println!(
        "  Stats: {} mutant | {} human | ratio {:.2}",
        stats.count_mutant_dna, stats.count_human_dna, stats.ratio
    );
    ExitCode::SUCCESS
}
