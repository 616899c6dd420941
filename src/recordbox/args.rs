use clap::Parser;
use recordbox::config::RawArgs;
use recordbox::item::ItemFormat;
use std::ffi::OsString;

/// Long flags that may also be spelled with a single dash (`-fileName x`).
const LONG_FLAGS: &[&str] = &[
    "operation",
    "fileName",
    "file-name",
    "id",
    "item",
    "itemFormat",
    "item-format",
    "verbose",
    "help",
    "version",
];

/// Flags whose value follows as the next argument unless given as `name=value`.
const VALUE_FLAGS: &[&str] = &[
    "operation",
    "fileName",
    "file-name",
    "id",
    "item",
    "itemFormat",
    "item-format",
];

#[derive(Parser, Debug)]
#[command(name = "recordbox", version)]
#[command(about = "Keep a small list of records in a JSON file", long_about = None)]
pub struct Cli {
    /// Operation to run: list, findById, add or remove
    #[arg(long)]
    pub operation: Option<String>,

    /// Path of the JSON file holding the records
    #[arg(
        long = "fileName",
        alias = "file-name",
        env = "RECORDBOX_FILE",
        allow_hyphen_values = true
    )]
    pub file_name: Option<String>,

    /// Record id (findById, remove)
    #[arg(long, allow_hyphen_values = true)]
    pub id: Option<String>,

    /// Record literal for add, e.g. {"id":"1","email":"a@b.com","age":30}
    #[arg(long, allow_hyphen_values = true)]
    pub item: Option<String>,

    /// How the add literal is read
    #[arg(
        long = "itemFormat",
        alias = "item-format",
        value_enum,
        default_value_t = ItemFormat::Positional
    )]
    pub item_format: ItemFormat,

    /// Verbose output (diagnostics on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn raw_args(&self) -> RawArgs {
        RawArgs {
            operation: self.operation.clone(),
            item: self.item.clone(),
            file_name: self.file_name.clone(),
            id: self.id.clone(),
            item_format: self.item_format,
        }
    }
}

/// Rewrites `-name` / `-name=value` into `--name` form for known long flags
/// so clap can parse them. The value of a value-taking flag is never
/// rewritten, so `-id -item` means id `-item`. Everything after a bare `--`
/// is left alone.
pub fn normalize_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    let mut pending_value = false;
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            if pending_value {
                pending_value = false;
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            pending_value = takes_next_value(&arg);
            promote(arg)
        })
        .collect()
}

fn takes_next_value(arg: &OsString) -> bool {
    let Some(text) = arg.to_str() else {
        return false;
    };
    let Some(name) = text
        .strip_prefix("--")
        .or_else(|| text.strip_prefix('-'))
    else {
        return false;
    };
    !name.contains('=') && VALUE_FLAGS.contains(&name)
}

fn promote(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    let Some(rest) = text.strip_prefix('-') else {
        return arg;
    };
    if rest.starts_with('-') {
        return arg;
    }

    let name = rest.split('=').next().unwrap_or(rest);
    if LONG_FLAGS.contains(&name) {
        OsString::from(format!("-{}", text))
    } else {
        arg
    }
}
