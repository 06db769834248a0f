use serde::Serialize;
use soctok::{ColorScheme, GraphPayload};
use soctok_render::{LayoutOptions, Sizing, SvgRenderOptions};
use std::io::Read;
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Token(soctok::Error),
    Render(soctok_render::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Token(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<soctok::Error> for CliError {
    fn from(value: soctok::Error) -> Self {
        Self::Token(value)
    }
}

impl From<soctok_render::Error> for CliError {
    fn from(value: soctok_render::Error) -> Self {
        Self::Render(value)
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
    Parse,
    Layout,
    Render,
}

#[derive(Debug, Clone, Copy, Default)]
enum SchemeKind {
    #[default]
    TwoAxis,
    ThreeAxis,
}

impl FromStr for SchemeKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two-axis" => Ok(Self::TwoAxis),
            "three-axis" => Ok(Self::ThreeAxis),
            _ => Err(()),
        }
    }
}

impl SchemeKind {
    fn scheme(self) -> ColorScheme {
        match self {
            Self::TwoAxis => ColorScheme::complaint_trr(),
            Self::ThreeAxis => ColorScheme::complaint_trr_salary(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum FitKind {
    #[default]
    Fitted,
    Canvas,
    Square,
}

impl FromStr for FitKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fitted" => Ok(Self::Fitted),
            "canvas" => Ok(Self::Canvas),
            "square" => Ok(Self::Square),
            _ => Err(()),
        }
    }
}

impl FitKind {
    fn sizing(self) -> Sizing {
        match self {
            Self::Fitted => Sizing::Fitted,
            Self::Canvas => Sizing::social_media_canvas(),
            Self::Square => Sizing::square_canvas(),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    scheme: SchemeKind,
    fit: FitKind,
    padding: f64,
    out: Option<String>,
}

fn usage() -> &'static str {
    "soctok-cli\n\
\n\
USAGE:\n\
  soctok-cli [parse] [--pretty] [<path>|-]\n\
  soctok-cli layout [--pretty] [<path>|-]\n\
  soctok-cli render [--scheme two-axis|three-axis] [--fit fitted|canvas|square] [--padding <n>] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the payload JSON is read from stdin.\n\
  - parse validates the payload (focused officer must exist) and prints it back.\n\
  - layout prints the positioned nodes as JSON.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        padding: 20.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "parse" => args.command = Command::Parse,
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--scheme" => {
                let Some(kind) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.scheme = kind
                    .parse::<SchemeKind>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--fit" => {
                let Some(kind) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.fit = kind
                    .parse::<FitKind>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--padding" => {
                let Some(pad) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.padding = pad.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.padding.is_finite() && args.padding >= 0.0) {
                    return Err(CliError::Usage(usage()));
                }
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

fn write_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None | Some("-") => {
            print!("{text}");
            Ok(())
        }
        Some(path) => Ok(std::fs::write(path, text)?),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let payload = GraphPayload::from_json(&text)?;

    match args.command {
        Command::Parse => {
            payload.validate()?;
            write_json(&payload, args.pretty)?;
            Ok(())
        }
        Command::Layout => {
            let layout = soctok_render::layout_graph(&payload, &LayoutOptions::default())?;
            write_json(&layout, args.pretty)?;
            Ok(())
        }
        Command::Render => {
            let layout = soctok_render::layout_graph(&payload, &LayoutOptions::default())?;
            let svg_options = SvgRenderOptions {
                scheme: args.scheme.scheme(),
                sizing: args.fit.sizing(),
                viewbox_padding: args.padding,
                ..Default::default()
            };
            let token = soctok_render::render_svg(&layout, &svg_options)?;
            write_text(&token.svg, args.out.as_deref())?;
            Ok(())
        }
    }
}

fn main() {
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
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
