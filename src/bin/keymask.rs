//! CLI tool for input masking.
//!
//! # Usage
//!
//! ```bash
//! # Mask a value
//! keymask format cpf 12345678901
//!
//! # Mask every line of stdin
//! cat phones.txt | keymask format phone-br
//!
//! # Show how a mask reacts to typing, one keystroke at a time
//! keymask type date-us-full 12252024
//!
//! # List formats, optionally by region
//! keymask list --region latin-america
//!
//! # Show the rule behind a format
//! keymask describe phone-mx
//! ```

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use keymask::binding::{Formatter, FormatterOptions, TextBuffer, TextInput};
use keymask::rules::{self, Renderer};
use keymask::segment::Lead;
use keymask::stream::FormatExt;
use keymask::{format, FormatId, Region};

#[derive(Parser)]
#[command(name = "keymask")]
#[command(
    author,
    version,
    about = "As-you-type input masks for IDs, phones, dates, money and codes"
)]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mask a value, or every line of stdin when no value is given
    Format {
        /// Format tag, e.g. cpf, phone-us, currency-eu
        format: FormatId,

        /// Raw value
        value: Option<String>,
    },

    /// Type a value one character at a time and print every intermediate mask
    Type {
        /// Format tag
        format: FormatId,

        /// Keys to type
        keys: String,
    },

    /// List supported formats
    List {
        /// Only list one region (brazil, united-states, europe, latin-america,
        /// asia, other-countries, universal, currency, time)
        #[arg(short, long, value_parser = parse_region)]
        region: Option<Region>,
    },

    /// Show the rule behind a format
    Describe {
        /// Format tag
        format: FormatId,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_region(s: &str) -> Result<Region, String> {
    Region::from_tag(s).ok_or_else(|| format!("unknown region '{}'", s.escape_default()))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Format {
            format: id,
            value: Some(value),
        } => {
            cmd_format(id, &value, cli.output);
            Ok(())
        }
        Commands::Format {
            format: id,
            value: None,
        } => cmd_format_stdin(id, cli.output),
        Commands::Type { format: id, keys } => {
            cmd_type(id, &keys, cli.output);
            Ok(())
        }
        Commands::List { region } => {
            cmd_list(region, cli.output);
            Ok(())
        }
        Commands::Describe { format: id } => {
            cmd_describe(id, cli.output);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_masked(id: FormatId, input: &str, masked: &str, output: OutputFormat) {
    match output {
        OutputFormat::Text => println!("{}", masked),
        OutputFormat::Json => println!(
            "{}",
            json!({ "format": id, "input": input, "masked": masked })
        ),
    }
}

fn cmd_format(id: FormatId, value: &str, output: OutputFormat) {
    print_masked(id, value, &format(id, value), output);
}

fn cmd_format_stdin(id: FormatId, output: OutputFormat) -> io::Result<()> {
    let lines: Vec<String> = io::stdin().lock().lines().collect::<io::Result<_>>()?;
    tracing::debug!(format = %id, lines = lines.len(), "formatting stdin");

    for (input, masked) in lines.iter().zip(lines.iter().mask_with(id)) {
        print_masked(id, input, &masked, output);
    }
    Ok(())
}

fn cmd_type(id: FormatId, keys: &str, output: OutputFormat) {
    let formatter = Formatter::new(FormatterOptions::new(id));
    let mut binding = formatter.attach(TextBuffer::default());

    let mut steps = Vec::new();
    for key in keys.chars() {
        binding.field_mut().insert(key);
        let masked = binding.handle_input();
        let caret = binding.field().caret().unwrap_or(0);
        steps.push((key, masked, caret));
    }

    match output {
        OutputFormat::Text => {
            for (key, masked, caret) in &steps {
                println!("{:>3}  {}|{}", key, head(masked, *caret), tail(masked, *caret));
            }
        }
        OutputFormat::Json => {
            let steps: Vec<_> = steps
                .iter()
                .map(|(key, masked, caret)| json!({ "key": key, "value": masked, "caret": caret }))
                .collect();
            println!("{}", json!({ "format": id, "steps": steps }));
        }
    }
}

fn head(s: &str, chars: usize) -> String {
    s.chars().take(chars).collect()
}

fn tail(s: &str, chars: usize) -> String {
    s.chars().skip(chars).collect()
}

fn cmd_list(region: Option<Region>, output: OutputFormat) {
    let regions: Vec<Region> = match region {
        Some(region) => vec![region],
        None => Region::ALL.to_vec(),
    };

    match output {
        OutputFormat::Text => {
            for region in regions {
                println!("{}:", region);
                for id in FormatId::in_region(region) {
                    println!("  {:<20} {}", id.as_str(), id.name());
                }
            }
        }
        OutputFormat::Json => {
            let formats: Vec<_> = regions
                .into_iter()
                .flat_map(FormatId::in_region)
                .map(|id| json!({ "id": id, "name": id.name(), "region": id.region().tag() }))
                .collect();
            println!("{}", json!(formats));
        }
    }
}

fn describe_renderer(renderer: &Renderer) -> String {
    match renderer {
        Renderer::Segmented(pattern) => {
            let mut layout = String::new();
            match pattern.lead {
                Lead::None => {}
                Lead::Open(text) => layout.push_str(&format!("{:?} before ", text)),
                Lead::Replace(text) => layout.push_str(&format!("{:?} in place of ", text)),
            }
            for (i, segment) in pattern.segments.iter().enumerate() {
                if i > 0 && !segment.separator.is_empty() {
                    layout.push_str(&format!(" {:?} ", segment.separator));
                } else if i > 0 {
                    layout.push(' ');
                }
                layout.push_str(&segment.width.to_string());
            }
            format!("segments {}", layout)
        }
        Renderer::Ladder(steps) => {
            let rungs: Vec<String> = steps
                .iter()
                .map(|step| {
                    let widths: Vec<String> = step
                        .pattern
                        .segments
                        .iter()
                        .map(|s| s.width.to_string())
                        .collect();
                    format!("up to {}: {}", step.up_to, widths.join("-"))
                })
                .collect();
            format!("by length ({})", rungs.join("; "))
        }
        Renderer::Chunked { width, separator } => {
            format!("groups of {} joined by {:?}", width, separator)
        }
        Renderer::LongDate(_) => "short date while typing, month name when complete".to_string(),
        Renderer::Currency(style) => format!(
            "money: symbol {:?}, thousands {:?}, decimal {:?}",
            style.symbol, style.thousands, style.decimal
        ),
        Renderer::Ipv4 => "dot-separated groups of up to 3 digits".to_string(),
        Renderer::Ipv6 => "8 colon-separated groups of 4 hex digits".to_string(),
        Renderer::Time12h => "HH:MM followed by AM/PM".to_string(),
    }
}

fn cmd_describe(id: FormatId, output: OutputFormat) {
    let rule = rules::rule(id);
    let layout = describe_renderer(&rule.renderer);
    let literals = rule.literals();

    match output {
        OutputFormat::Text => {
            println!("Format: {}", id);
            println!("Name: {}", id.name());
            println!("Region: {}", id.region());
            println!("Characters: {:?}", rule.class);
            match rule.max_length {
                Some(max) => println!("Max Length: {}", max),
                None => println!("Max Length: none"),
            }
            println!("Layout: {}", layout);
            println!("Literals: {:?}", literals);
        }
        OutputFormat::Json => println!(
            "{}",
            json!({
                "format": id,
                "name": id.name(),
                "region": id.region().tag(),
                "characters": format!("{:?}", rule.class),
                "max_length": rule.max_length,
                "layout": layout,
                "literals": literals,
            })
        ),
    }
}
