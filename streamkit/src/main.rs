//! Streamkit CLI - apply collection transforms to JSON records
//!
//! Every command reads a JSON array of records (from `--input`, or stdin) and
//! writes JSON (to `--output`, or stdout).
//!
//! ```bash
//! streamkit pluck --field home.city --distinct -i cats.json
//! streamkit filter --field name --matches '^t' -i cats.json
//! streamkit select --where age --equals 3 --field name -i cats.json
//! streamkit flatten --field tags --distinct -i cats.json
//! streamkit distinct --by name -i cats.json
//! streamkit index --key id --value name -i cats.json
//! streamkit group --key home.city -i cats.json
//! streamkit find --field id --equals 2 -i cats.json
//! streamkit config                 # Show effective options
//! ```

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use streamkit::error::{CliError, CliResult};
use streamkit::{
    as_array, distinct, distinct_by_key, filter_and_map_to_list, filter_to_list, find_first,
    flat_map_to_distinct_list, flat_map_to_list, group_to_map, group_to_map_with,
    map_to_distinct_list, map_to_list, to_map, to_map_with, FieldFilter, FieldPath, HashedValue,
    Matcher, Options, Pipeline,
};

#[derive(Parser)]
#[command(name = "streamkit")]
#[command(about = "Map, filter, flatten, index and group JSON records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Compact JSON output (overrides STREAMKIT_PRETTY)
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Args)]
struct IoArgs {
    /// Input JSON file, an array of records (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct MatchArgs {
    /// Field equals a JSON literal (e.g. 42, true, '"tom"')
    #[arg(long, value_name = "JSON")]
    equals: Option<String>,

    /// Field equals a string
    #[arg(long, value_name = "TEXT")]
    equals_str: Option<String>,

    /// Field is a string matching a regular expression
    #[arg(long, value_name = "REGEX")]
    matches: Option<String>,

    /// Field is present and not null
    #[arg(long)]
    present: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a field from every record, dropping absent values
    Pluck {
        /// Dotted field path
        #[arg(short, long)]
        field: String,

        /// Drop repeated values
        #[arg(short, long)]
        distinct: bool,

        /// Keep string values only
        #[arg(long)]
        strings: bool,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Keep records whose field matches
    Filter {
        /// Dotted field path
        #[arg(short, long)]
        field: String,

        #[command(flatten)]
        matcher: MatchArgs,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Extract a field from the records whose `--where` field matches
    Select {
        /// Dotted path of the field to test
        #[arg(long = "where", value_name = "PATH")]
        where_field: String,

        #[command(flatten)]
        matcher: MatchArgs,

        /// Dotted path of the field to extract
        #[arg(short, long)]
        field: String,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Concatenate an array field across records (one level)
    Flatten {
        /// Dotted field path
        #[arg(short, long)]
        field: String,

        /// Drop repeated values
        #[arg(short, long)]
        distinct: bool,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Drop repeated records
    Distinct {
        /// Compare records on this field only
        #[arg(long, value_name = "PATH")]
        by: Option<String>,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Index records by a key field (last record wins per key)
    Index {
        /// Dotted path of the key field
        #[arg(short, long)]
        key: String,

        /// Store this field instead of the whole record
        #[arg(short, long)]
        value: Option<String>,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Group records by a key field
    Group {
        /// Dotted path of the key field
        #[arg(short, long)]
        key: String,

        /// Collect this field instead of the whole record
        #[arg(short, long)]
        value: Option<String>,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Print the first record whose field matches (null if none)
    Find {
        /// Dotted field path
        #[arg(short, long)]
        field: String,

        #[command(flatten)]
        matcher: MatchArgs,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Show effective options
    Config,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut options = match Options::from_env() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if cli.compact {
        options.pretty = false;
    }

    env_logger::Builder::new()
        .filter_level(options.level_filter())
        .parse_default_env()
        .init();

    if let Err(e) = run(cli.command, &options) {
        log::debug!("command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands, options: &Options) -> CliResult<()> {
    match command {
        Commands::Pluck {
            field,
            distinct,
            strings,
            io,
        } => cmd_pluck(&field, distinct, strings, &io, options),

        Commands::Filter { field, matcher, io } => cmd_filter(&field, &matcher, &io, options),

        Commands::Select {
            where_field,
            matcher,
            field,
            io,
        } => cmd_select(&where_field, &matcher, &field, &io, options),

        Commands::Flatten {
            field,
            distinct,
            io,
        } => cmd_flatten(&field, distinct, &io, options),

        Commands::Distinct { by, io } => cmd_distinct(by.as_deref(), &io, options),

        Commands::Index { key, value, io } => cmd_index(&key, value.as_deref(), &io, options),

        Commands::Group { key, value, io } => cmd_group(&key, value.as_deref(), &io, options),

        Commands::Find { field, matcher, io } => cmd_find(&field, &matcher, &io, options),

        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(options)?);
            Ok(())
        }
    }
}

fn cmd_pluck(
    field: &str,
    distinct: bool,
    strings: bool,
    io: &IoArgs,
    options: &Options,
) -> CliResult<()> {
    let path = FieldPath::parse(field)?;
    let records = read_records(io.input.as_deref())?;

    let values: Vec<Value> = match (distinct, strings) {
        (false, false) => map_to_list(&records, path.stage()),
        (false, true) => map_to_list(
            &records,
            Pipeline::new(path.stage()).then(keep_string).into_fn(),
        ),
        (true, false) => unhash(map_to_distinct_list(
            &records,
            Pipeline::new(path.stage()).then(hashed).into_fn(),
        )),
        (true, true) => unhash(map_to_distinct_list(
            &records,
            Pipeline::new(path.stage())
                .then(keep_string)
                .then(hashed)
                .into_fn(),
        )),
    };

    log::info!("plucked {} value(s) of '{}'", values.len(), path);
    write_output(&Value::from(values), io.output.as_deref(), options)
}

fn cmd_filter(field: &str, matcher: &MatchArgs, io: &IoArgs, options: &Options) -> CliResult<()> {
    let filter = FieldFilter::new(FieldPath::parse(field)?, matcher.to_matcher()?);
    let records = read_records(io.input.as_deref())?;
    let total = records.len();

    let kept = filter_to_list(records, |r| filter.test(r));

    log::info!("kept {} of {} record(s)", kept.len(), total);
    write_output(&Value::from(kept), io.output.as_deref(), options)
}

fn cmd_select(
    where_field: &str,
    matcher: &MatchArgs,
    field: &str,
    io: &IoArgs,
    options: &Options,
) -> CliResult<()> {
    let filter = FieldFilter::new(FieldPath::parse(where_field)?, matcher.to_matcher()?);
    let path = FieldPath::parse(field)?;
    let records = read_records(io.input.as_deref())?;

    let values = filter_and_map_to_list(&records, |r| filter.test(r), path.stage());

    log::info!("selected {} value(s) of '{}'", values.len(), path);
    write_output(&Value::from(values), io.output.as_deref(), options)
}

fn cmd_flatten(field: &str, distinct: bool, io: &IoArgs, options: &Options) -> CliResult<()> {
    let path = FieldPath::parse(field)?;
    let records = read_records(io.input.as_deref())?;
    let extractor = |r: &Value| path.get(r).and_then(as_array);

    let values: Vec<Value> = if distinct {
        unhash(flat_map_to_distinct_list(&records, extractor, hashed))
    } else {
        flat_map_to_list(&records, extractor, Some)
    };

    log::info!("flattened '{}' into {} value(s)", path, values.len());
    write_output(&Value::from(values), io.output.as_deref(), options)
}

fn cmd_distinct(by: Option<&str>, io: &IoArgs, options: &Options) -> CliResult<()> {
    let records = read_records(io.input.as_deref())?;
    let total = records.len();

    let unique = match by {
        Some(by) => {
            let path = FieldPath::parse(by)?;
            distinct_by_key(records, path.distinct_key())
        }
        None => unhash(distinct(records.into_iter().map(HashedValue))),
    };

    log::info!("{} distinct of {} record(s)", unique.len(), total);
    write_output(&Value::from(unique), io.output.as_deref(), options)
}

fn cmd_index(key: &str, value: Option<&str>, io: &IoArgs, options: &Options) -> CliResult<()> {
    let key = FieldPath::parse(key)?;
    let value = value.map(FieldPath::parse).transpose()?;
    let records = read_records(io.input.as_deref())?;

    let index = index_records(records, &key, value.as_ref());

    log::info!("indexed {} key(s) by '{}'", index.len(), key);
    write_output(&to_object(index), io.output.as_deref(), options)
}

fn index_records(
    records: Vec<Value>,
    key: &FieldPath,
    value: Option<&FieldPath>,
) -> HashMap<String, Value> {
    match value {
        Some(value) => to_map_with(records, key.key(), |r| field_or_null(value, &r)),
        None => to_map(records, key.key()),
    }
}

fn cmd_group(key: &str, value: Option<&str>, io: &IoArgs, options: &Options) -> CliResult<()> {
    let key = FieldPath::parse(key)?;
    let value = value.map(FieldPath::parse).transpose()?;
    let records = read_records(io.input.as_deref())?;

    let groups = group_records(records, &key, value.as_ref());

    log::info!("grouped into {} key(s) by '{}'", groups.len(), key);
    write_output(&to_object(groups), io.output.as_deref(), options)
}

fn group_records(
    records: Vec<Value>,
    key: &FieldPath,
    value: Option<&FieldPath>,
) -> HashMap<String, Vec<Value>> {
    match value {
        Some(value) => group_to_map_with(records, key.key(), |r| field_or_null(value, &r)),
        None => group_to_map(records, key.key()),
    }
}

fn cmd_find(field: &str, matcher: &MatchArgs, io: &IoArgs, options: &Options) -> CliResult<()> {
    let filter = FieldFilter::new(FieldPath::parse(field)?, matcher.to_matcher()?);
    let records = read_records(io.input.as_deref())?;

    let found = find_first(records, |r| filter.test(r));

    log::info!("match {}", if found.is_some() { "found" } else { "not found" });
    write_output(&found.unwrap_or(Value::Null), io.output.as_deref(), options)
}

impl MatchArgs {
    fn to_matcher(&self) -> CliResult<Matcher> {
        let matcher = match (&self.equals, &self.equals_str, &self.matches) {
            (Some(literal), _, _) => Matcher::equals_json(literal)?,
            (_, Some(text), _) => Matcher::equals_str(text),
            (_, _, Some(pattern)) => Matcher::matches(pattern)?,
            _ => Matcher::Present,
        };
        Ok(matcher)
    }
}

fn keep_string(value: Value) -> Option<Value> {
    value.is_string().then_some(value)
}

fn hashed(value: Value) -> Option<HashedValue> {
    Some(HashedValue(value))
}

fn unhash(values: Vec<HashedValue>) -> Vec<Value> {
    values.into_iter().map(|h| h.0).collect()
}

/// Map values are stored as-is: an absent field becomes `null`, not a gap.
fn field_or_null(path: &FieldPath, record: &Value) -> Value {
    path.get(record).cloned().unwrap_or(Value::Null)
}

fn to_object<V: Into<Value>>(map: HashMap<String, V>) -> Value {
    Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
}

fn read_records(input: Option<&Path>) -> CliResult<Vec<Value>> {
    let content = match input {
        Some(path) => {
            log::debug!("reading {}", path.display());
            fs::read_to_string(path)?
        }
        None => {
            log::debug!("reading stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    parse_records(&content)
}

fn parse_records(content: &str) -> CliResult<Vec<Value>> {
    let parsed: Value = serde_json::from_str(content)?;
    match parsed {
        Value::Array(records) => {
            log::info!("read {} record(s)", records.len());
            Ok(records)
        }
        other => Err(CliError::NotAnArray(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn write_output(value: &Value, path: Option<&Path>, options: &Options) -> CliResult<()> {
    let content = if options.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match path {
        Some(p) => {
            fs::write(p, content)?;
            log::info!("output written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
