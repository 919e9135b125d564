use serde::Serialize;
use std::io::Read;
use tagboard::render::{ChartConfig, SvgRenderOptions, layout_documents, render_documents_svg};
use tagboard::store::{MemoryStore, delete_subtree};
use tagboard::{Document, OutlineNode, build_outline, parse_documents};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Model(tagboard::Error),
    Chart(tagboard::render::HeadlessError),
    Json(serde_json::Error),
    Store(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Model(err) => write!(f, "{err}"),
            CliError::Chart(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Store(msg) => write!(f, "store error: {msg}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<tagboard::Error> for CliError {
    fn from(value: tagboard::Error) -> Self {
        Self::Model(value)
    }
}

impl From<tagboard::render::HeadlessError> for CliError {
    fn from(value: tagboard::render::HeadlessError) -> Self {
        Self::Chart(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Render,
    Outline,
    Prune,
}

#[derive(Debug)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    collection: String,
    tag: Option<String>,
    background: Option<String>,
    out: Option<String>,
    config: ChartConfig,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            command: Command::Layout,
            input: None,
            pretty: false,
            collection: "Race".to_string(),
            tag: None,
            background: None,
            out: None,
            config: ChartConfig::default(),
        }
    }
}

fn usage() -> &'static str {
    "tagboard-cli\n\
\n\
USAGE:\n\
  tagboard-cli [layout] [--pretty] [--box-size <n>] [--h-spacing <n>] [--v-spacing <n>] [--margin <n>] [<path>|-]\n\
  tagboard-cli render [--background <css-color>] [--box-size <n>] [--h-spacing <n>] [--v-spacing <n>] [--margin <n>] [--out <path>] [<path>|-]\n\
  tagboard-cli outline [--collection <name>] [<path>|-]\n\
  tagboard-cli prune --tag <full_tag> [--collection <name>] [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - Input is a JSON array of documents (a collection snapshot, store order).\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - layout prints the chart layout as JSON; render prints SVG to stdout (use --out for a file).\n\
  - prune deletes the subtree rooted at --tag by string prefix and prints the surviving snapshot.\n\
  - Set TAGBOARD_LOG (e.g. 'tagboard_store=info') to see store/layout events on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "outline" => args.command = Command::Outline,
            "prune" => args.command = Command::Prune,
            "--pretty" => args.pretty = true,
            "--collection" => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.collection = name.clone();
            }
            "--tag" => {
                let Some(tag) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.tag = Some(tag.clone());
            }
            "--background" => {
                let Some(bg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--box-size" => {
                args.config.box_size = parse_dim(it.next())?;
            }
            "--h-spacing" => {
                args.config.h_spacing = parse_dim(it.next())?;
            }
            "--v-spacing" => {
                args.config.v_spacing = parse_dim(it.next())?;
            }
            "--margin" => {
                args.config.margin = parse_dim(it.next())?;
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn parse_dim(raw: Option<&String>) -> Result<f64, CliError> {
    let Some(raw) = raw else {
        return Err(CliError::Usage(usage()));
    };
    let value = raw.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
    if !(value.is_finite() && value >= 0.0) {
        return Err(CliError::Usage(usage()));
    }
    Ok(value)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn warn_unknown_collection(collection: &str) {
    if !tagboard::COLLECTIONS.contains(&collection) {
        tracing::warn!(collection, "not one of the editor's known collections");
    }
}

fn push_outline(out: &mut String, nodes: &[OutlineNode], depth: usize) {
    for node in nodes {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&node.label);
        out.push('\n');
        push_outline(out, &node.children, depth + 1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let documents: Vec<Document> = parse_documents(&text)?;
    tracing::info!(documents = documents.len(), "snapshot loaded");

    match args.command {
        Command::Layout => {
            let layout = layout_documents(&documents, &args.config)?;
            write_json(&layout, args.pretty)
        }
        Command::Render => {
            let options = SvgRenderOptions {
                background: args.background.clone(),
                ..Default::default()
            };
            let svg = render_documents_svg(&documents, &args.config, &options)?;
            write_text(&svg, args.out.as_deref())
        }
        Command::Outline => {
            warn_unknown_collection(&args.collection);
            let outline = build_outline(&args.collection, &documents);
            let mut out = String::new();
            push_outline(&mut out, &outline, 0);
            write_text(&out, args.out.as_deref())
        }
        Command::Prune => {
            let Some(tag) = args.tag.as_deref() else {
                return Err(CliError::Usage(usage()));
            };
            warn_unknown_collection(&args.collection);
            let mut store = MemoryStore::new();
            store.seed(&args.collection, documents);

            let outcome = delete_subtree(&mut store, &args.collection, tag);
            if !outcome.ok {
                return Err(CliError::Store(outcome.message));
            }
            eprintln!("{}", outcome.message);

            let survivors = tagboard::store::load_collection(&store, &args.collection).0;
            write_json(&survivors, args.pretty)
        }
    }
}

fn main() {
    let filter = std::env::var("TAGBOARD_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
