//! Command-line interface for xfa-dom.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{validate_locale_name, DEFAULT_MAX_DEPTH};
use crate::error::{DomError, Result};
use crate::loader::{load_file, LoadOptions};
use crate::locale::{LocaleSet, PatternStyle};
use crate::pattern::format_date;
use crate::schema::{ElementKind, PropertyEntry};
use crate::validate::validate;
use crate::writer::to_yaml;

/// xfa-dom - Inspect and validate XFA localeSet packets.
#[derive(Parser)]
#[command(name = "xfa-dom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a localeSet file and check it against the schema.
    Validate {
        /// Path to the localeSet XML file
        file: PathBuf,

        /// Fail on the first unknown element instead of skipping it
        #[arg(long)]
        strict: bool,

        /// Maximum element nesting depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// Print the property table of one element kind, or of all kinds.
    Schema {
        /// Element name (e.g., datePatterns)
        kind: Option<String>,
    },

    /// Dump a localeSet file as YAML.
    Dump {
        /// Path to the localeSet XML file
        file: PathBuf,

        /// Fail on the first unknown element instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Render a date with one of a locale's date patterns.
    Format {
        /// Path to the localeSet XML file
        file: PathBuf,

        /// Locale name (e.g., en_US)
        #[arg(short, long)]
        locale: String,

        /// Pattern style: full, long, med or short
        #[arg(short, long, default_value = "med")]
        style: String,

        /// Date in YYYY-MM-DD format (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            file,
            strict,
            max_depth,
        } => validate_command(&file, strict, max_depth),
        Commands::Schema { kind } => schema_command(kind.as_deref()),
        Commands::Dump { file, strict } => dump_command(&file, strict),
        Commands::Format {
            file,
            locale,
            style,
            date,
        } => format_command(&file, &locale, &style, date.as_deref()),
    }
}

fn load_options(strict: bool, max_depth: usize) -> LoadOptions {
    let options = LoadOptions::new().with_max_depth(max_depth);
    if strict {
        options.strict()
    } else {
        options
    }
}

/// Execute the validate command.
fn validate_command(file: &Path, strict: bool, max_depth: usize) -> Result<()> {
    let outcome = load_file(file, &load_options(strict, max_depth))?;

    for warning in &outcome.warnings {
        println!("{} {warning}", style("warning:").yellow().bold());
    }

    let report = validate(&outcome.document);
    for issue in report.issues() {
        println!("{} {issue}", style("error:").red().bold());
    }

    if !report.is_valid() {
        return Err(DomError::Invalid(format!(
            "{} has {} issue(s)",
            file.display(),
            report.issues().len()
        )));
    }

    println!(
        "{} {} ({} nodes)",
        style("Valid:").green().bold(),
        file.display(),
        outcome.document.len()
    );
    Ok(())
}

/// Execute the schema command.
fn schema_command(kind: Option<&str>) -> Result<()> {
    match kind {
        Some(name) => {
            let kind = ElementKind::from_name(name);
            if kind.is_unknown() {
                return Err(DomError::UnknownElement {
                    tag_name: name.to_string(),
                    context: None,
                });
            }
            print!("{}", render_schema(kind));
        }
        None => {
            for kind in ElementKind::ALL {
                print!("{}", render_schema(kind));
            }
        }
    }
    Ok(())
}

/// Execute the dump command.
fn dump_command(file: &Path, strict: bool) -> Result<()> {
    let outcome = load_file(file, &load_options(strict, DEFAULT_MAX_DEPTH))?;
    print!("{}", to_yaml(&outcome.document)?);
    Ok(())
}

/// Execute the format command.
fn format_command(file: &Path, locale: &str, style_name: &str, date: Option<&str>) -> Result<()> {
    validate_locale_name(locale)?;
    let pattern_style = PatternStyle::from_name(style_name).ok_or_else(|| {
        DomError::Invalid(format!(
            "unknown pattern style '{style_name}', expected full, long, med or short"
        ))
    })?;
    let date = match date {
        Some(text) => chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map_err(|_| DomError::Invalid(format!("invalid date '{text}', expected YYYY-MM-DD")))?,
        None => chrono::Local::now().date_naive(),
    };

    let outcome = load_file(file, &LoadOptions::default())?;
    let set = LocaleSet::new(&outcome.document)?;
    let view = set
        .locale(locale)
        .ok_or_else(|| DomError::Invalid(format!("locale '{locale}' not found")))?;
    let pattern = view.date_pattern(pattern_style).ok_or_else(|| {
        DomError::Invalid(format!("locale '{locale}' has no {pattern_style} date pattern"))
    })?;

    println!("{}", format_date(pattern, date, &view)?);
    Ok(())
}

/// Describe the cardinality of a property entry, e.g. `0..4` or `0..*`.
fn occurs(entry: &PropertyEntry) -> String {
    if entry.is_unbounded() {
        format!("{}..*", entry.min_occurs)
    } else {
        format!("{}..{}", entry.min_occurs, entry.max_occurs)
    }
}

/// Plain-text rendering of a kind's spec and property table.
#[must_use]
pub fn render_schema(kind: ElementKind) -> String {
    let spec = kind.spec();
    let packets: Vec<_> = spec.packets.iter().map(|p| p.name()).collect();

    let mut out = String::new();
    out.push_str(&format!(
        "<{}> category={:?} packets={}\n",
        kind,
        spec.category,
        packets.join(",")
    ));

    let table = spec.properties;
    if table.is_empty() {
        out.push_str("  (no child elements)\n");
    }
    for entry in table.entries() {
        out.push_str(&format!(
            "  {:<16} {}\n",
            entry.child_kind.name(),
            occurs(entry)
        ));
    }
    out
}
