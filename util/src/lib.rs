use std::{
    fmt, fs,
    io::{self, IsTerminal, Read},
    path::PathBuf,
    str::FromStr,
};

use nom::{
    character::complete::{digit1, one_of},
    combinator::{map_res, opt, recognize},
    error::ParseError,
    sequence::tuple,
    IResult,
};
use nom_locate::LocatedSpan;
use nom_supreme::{
    error::{ErrorTree, GenericErrorTree},
    final_parser::final_parser,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Thanks to FasterThanLime! https://fasterthanli.me/series/advent-of-code-2022/part-11

pub type Span<'a> = LocatedSpan<&'a str>;

pub fn parse_number<'a, E>(i: Span<'a>) -> IResult<Span<'a>, i64, E>
where
    E: ParseError<Span<'a>> + nom::error::FromExternalError<Span<'a>, anyhow::Error>,
{
    map_res(recognize(tuple((opt(one_of("+-")), digit1))), |i: Span<'a>| {
        FromStr::from_str(i.fragment()).map_err(anyhow::Error::msg)
    })(i)
}

/// Where a parser gave up, relative to the start of the text it was handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadToken {
    pub offset: usize,
    pub kind: String,
}

impl BadToken {
    fn from_tree(tree: &ErrorTree<Span<'_>>) -> Self {
        match tree {
            GenericErrorTree::Base { location, kind } => Self {
                offset: location.location_offset(),
                kind: kind.to_string(),
            },
            GenericErrorTree::Stack { base, .. } => Self::from_tree(base),
            // the alternative that got furthest is the most useful one to report
            GenericErrorTree::Alt(alts) => alts
                .iter()
                .map(Self::from_tree)
                .max_by_key(|bad| bad.offset)
                .unwrap_or_else(|| Self {
                    offset: 0,
                    kind: "no alternative matched".to_string(),
                }),
        }
    }
}

/// Runs `parse_fun` over all of `l`, failing if anything is left unconsumed.
pub fn parse_complete<'a, T, F>(l: &'a str, parse_fun: F) -> Result<T, BadToken>
where
    F: FnMut(Span<'a>) -> IResult<Span<'a>, T, ErrorTree<Span<'a>>>,
{
    let line_span = Span::new(l);
    let line: Result<_, ErrorTree<Span>> = final_parser(parse_fun)(line_span);
    line.map_err(|e| BadToken::from_tree(&e))
}

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum InputError {
    #[error("unable to read input file {}", path.display())]
    #[diagnostic(code(util::input::file))]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to read standard input")]
    #[diagnostic(code(util::input::stdin))]
    Stdin(#[source] io::Error),
}

/// Something that can hand over the whole puzzle input as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` both mean standard input.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path.as_os_str() != "-" => Self::File(path),
            _ => Self::Stdin,
        }
    }

    pub fn read_to_string(&self) -> Result<String, InputError> {
        let input = match self {
            Self::Stdin => {
                let mut input = String::new();
                io::stdin()
                    .lock()
                    .read_to_string(&mut input)
                    .map_err(InputError::Stdin)?;
                input
            }
            Self::File(path) => fs::read_to_string(path).map_err(|source| InputError::File {
                path: path.clone(),
                source,
            })?,
        };
        debug!(source = %self, bytes = input.len(), "read input");

        Ok(input)
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (true, _) => Self::Verbose,
            (false, true) => Self::Quiet,
            (false, false) => Self::Normal,
        }
    }

    fn directive(self) -> &'static str {
        match self {
            Self::Quiet => "warn",
            Self::Normal => "info",
            Self::Verbose => "debug",
        }
    }
}

/// Diagnostics go to stderr so stdout only ever carries answers.
/// `RUST_LOG` overrides whatever `verbosity` asks for.
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false)
                .compact(),
        )
        .init();
}
