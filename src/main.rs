use clap::{Parser, Subcommand};
use pudelko::config::{Config, OutputMode};
use pudelko::pudelko::{self as boxes, FormatSpec, Pudelko, PudelkoError, Unit};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Parser)]
#[command(name = "pudelko")]
#[command(about = "Build, parse and combine immutable 3D boxes", long_about = None)]
struct Cli {
    /// Config file (default: ./pudelko.toml when present)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Construct a box from up to three dimensions (missing ones are 0.1 m)
    New {
        a: f64,
        b: Option<f64>,
        c: Option<f64>,

        /// Unit of the given dimensions: m, cm or mm
        #[arg(short, long)]
        unit: Option<String>,

        /// Output format: m, cm or mm
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Parse a box (e.g. "1.000 m × 2.000 m × 3.000 m" or a millimeter triple "1000,2000,3000")
    Parse {
        input: String,

        #[arg(short, long)]
        format: Option<String>,
    },

    /// Add two boxes side by side (a+a, b+b, c+c)
    Add {
        lhs: String,
        rhs: String,

        #[arg(short, long)]
        format: Option<String>,
    },

    /// Compare two boxes
    Compare { lhs: String, rhs: String },

    /// Cube with the same volume
    Compress {
        input: String,

        #[arg(short, long)]
        format: Option<String>,
    },

    /// Sort boxes by volume, then surface area, then edge length
    Sort {
        #[arg(required = true)]
        inputs: Vec<String>,

        #[arg(short, long)]
        format: Option<String>,
    },
}

#[derive(Serialize)]
struct BoxReport {
    #[serde(rename = "box")]
    pudelko: Pudelko,
    text: String,
    volume: f64,
    surface_area: f64,
    edge_sum: f64,
}

impl BoxReport {
    fn new(pudelko: Pudelko, spec: FormatSpec) -> Self {
        Self {
            pudelko,
            text: pudelko.format_with(spec),
            volume: pudelko.volume(),
            surface_area: pudelko.surface_area(),
            edge_sum: pudelko.edge_sum(),
        }
    }
}

#[derive(Serialize)]
struct CompareReport {
    equal: bool,
    ordering: &'static str,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::discover(cli.config.as_deref())?;
    if cli.json {
        config.output = OutputMode::Json;
    }

    match cli.command {
        Commands::New {
            a,
            b,
            c,
            unit,
            format,
        } => {
            let unit = match unit {
                Some(symbol) => Unit::from_symbol(&symbol)?,
                None => config.default_unit,
            };
            let mut builder = Pudelko::builder().a(a).unit(unit);
            if let Some(b) = b {
                builder = builder.b(b);
            }
            if let Some(c) = c {
                builder = builder.c(c);
            }
            let pudelko = builder.build()?;
            print_box(&config, pudelko, format.as_deref())
        }
        Commands::Parse { input, format } => {
            let pudelko = read_box(&input)?;
            print_box(&config, pudelko, format.as_deref())
        }
        Commands::Add { lhs, rhs, format } => {
            let sum = (read_box(&lhs)? + read_box(&rhs)?)?;
            print_box(&config, sum, format.as_deref())
        }
        Commands::Compare { lhs, rhs } => compare_boxes(&config, &lhs, &rhs),
        Commands::Compress { input, format } => {
            let cube = read_box(&input)?.compress()?;
            print_box(&config, cube, format.as_deref())
        }
        Commands::Sort { inputs, format } => {
            let mut list = inputs
                .iter()
                .map(|input| read_box(input))
                .collect::<Result<Vec<_>, _>>()?;
            boxes::sort_boxes(&mut list);
            print_boxes(&config, &list, format.as_deref())
        }
    }
}

/// Accept either the text form or a comma separated millimeter triple
fn read_box(input: &str) -> Result<Pudelko, PudelkoError> {
    if boxes::looks_like_pudelko_string(input) {
        return Pudelko::parse(input);
    }

    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if let [a, b, c] = parts.as_slice() {
        if let (Ok(a), Ok(b), Ok(c)) = (a.parse::<i32>(), b.parse::<i32>(), c.parse::<i32>()) {
            return Pudelko::from_millimeter_triple(a, b, c);
        }
    }

    // Not a recognised shape; let the parser report what is wrong
    Pudelko::parse(input)
}

fn resolve_format(config: &Config, format: Option<&str>) -> Result<FormatSpec, PudelkoError> {
    match format {
        Some(spec) => spec.parse(),
        None => Ok(config.default_format),
    }
}

fn print_box(
    config: &Config,
    pudelko: Pudelko,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let spec = resolve_format(config, format)?;

    match config.output {
        OutputMode::Json => {
            let json = serde_json::to_string_pretty(&BoxReport::new(pudelko, spec))?;
            println!("{}", json);
        }
        OutputMode::Text => {
            println!("{}", pudelko.format_with(spec));
            println!("  volume:       {} m³", pudelko.volume());
            println!("  surface area: {} m²", pudelko.surface_area());
        }
    }

    Ok(())
}

fn print_boxes(
    config: &Config,
    list: &[Pudelko],
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let spec = resolve_format(config, format)?;

    match config.output {
        OutputMode::Json => {
            let reports: Vec<BoxReport> = list.iter().map(|p| BoxReport::new(*p, spec)).collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputMode::Text => {
            for (i, pudelko) in list.iter().enumerate() {
                println!(
                    "{}. {}  (V = {} m³, A = {} m²)",
                    i + 1,
                    pudelko.format_with(spec),
                    pudelko.volume(),
                    pudelko.surface_area()
                );
            }
        }
    }

    Ok(())
}

fn compare_boxes(config: &Config, lhs: &str, rhs: &str) -> Result<(), Box<dyn std::error::Error>> {
    let lhs = read_box(lhs)?;
    let rhs = read_box(rhs)?;

    let ordering = match boxes::by_volume_area_edges(&lhs, &rhs) {
        Ordering::Less => "smaller",
        Ordering::Equal => "same size",
        Ordering::Greater => "larger",
    };

    let report = CompareReport {
        equal: lhs == rhs,
        ordering,
    };

    match config.output {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputMode::Text => {
            println!("{}", if report.equal { "equal" } else { "not equal" });
            println!("by volume/area/edges: {}", report.ordering);
        }
    }

    Ok(())
}
