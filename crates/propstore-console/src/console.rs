use std::io::{BufRead, Write};

use propstore_registry::{infer_kind, Registry};
use propstore_types::PrimitiveKind;
use tracing::debug;

use crate::command::{Command, Target};
use crate::config::ConsoleConfig;
use crate::error::ConsoleResult;

const HELP: &[&str] = &[
    "GET name        print a property",
    "GET *           print every property",
    "SET name=value  write a property, defining it if needed",
    "DEFINE name k   define a property of kind k (text, int32, int64, float64)",
    "DELETE name     remove a property",
    "COUNT           number of properties",
    "EXIT            leave the console",
];

/// Whether the loop keeps reading after a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Line-oriented front end over a [`Registry`].
///
/// Data errors are reported as a single line and never end the loop; only
/// `EXIT` or end of input do.
pub struct Console<'a> {
    registry: &'a mut Registry,
    prompt: String,
    banner: bool,
}

impl<'a> Console<'a> {
    pub fn new(registry: &'a mut Registry) -> Self {
        Self {
            registry,
            prompt: ">".into(),
            banner: true,
        }
    }

    pub fn with_config(registry: &'a mut Registry, config: &ConsoleConfig) -> Self {
        Self {
            registry,
            prompt: config.prompt.clone(),
            banner: config.banner,
        }
    }

    /// Read commands from `input` until `EXIT` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> ConsoleResult<()> {
        if self.banner && !self.registry.name().is_empty() {
            writeln!(output, "Console for storage: [{}]", self.registry.name())?;
            writeln!(output)?;
        }

        let mut line = String::new();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("console input closed");
                break;
            }

            let flow = self.execute(line.trim_end_matches(['\r', '\n']), output)?;
            writeln!(output)?;
            if flow == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Execute one input line, writing its response to `output`.
    pub fn execute<W: Write>(&mut self, line: &str, output: &mut W) -> ConsoleResult<Flow> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                debug!(line, error = ?e, "console line rejected");
                writeln!(output, "{e}")?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "console command");

        match command {
            Command::Empty => {}
            Command::Exit => return Ok(Flow::Exit),
            Command::Get(Target::All) => {
                if self.registry.is_empty() {
                    writeln!(output, "No properties defined in the storage.")?;
                } else {
                    write!(output, "{}", self.registry)?;
                }
            }
            Command::Get(Target::Name(name)) => match self.registry.get(&name) {
                Ok(property) => writeln!(output, "{property}")?,
                Err(_) => writeln!(output, "Property not defined.")?,
            },
            Command::Set { name, value } => {
                if let Ok(kind) = self.registry.get(&name).map(|p| p.kind()) {
                    if let Err(e) = self.registry.set_text(&name, value_for(kind, &value)) {
                        writeln!(output, "{e}")?;
                    }
                } else {
                    let sample = value_for(infer_kind(value.trim()), &value);
                    match self.registry.define_inferred(&name, sample) {
                        Ok(_) => writeln!(output, "New property was added to the storage.")?,
                        Err(e) => writeln!(output, "{e}")?,
                    }
                }
            }
            Command::Define { name, kind } => match self.registry.define(&name, kind) {
                Ok(()) => writeln!(output, "Property was defined.")?,
                Err(e) => writeln!(output, "{e}")?,
            },
            Command::Delete(name) => match self.registry.delete(&name) {
                Ok(()) => writeln!(output, "Property was deleted.")?,
                Err(e) => writeln!(output, "{e}")?,
            },
            Command::Count => writeln!(output, "{}", self.registry.count())?,
            Command::Help => {
                for line in HELP {
                    writeln!(output, "{line}")?;
                }
            }
        }
        Ok(Flow::Continue)
    }
}

/// Numeric grammars are strict, so their values lose surrounding whitespace;
/// text values are stored as typed.
fn value_for(kind: PrimitiveKind, raw: &str) -> &str {
    if kind.is_numeric() {
        raw.trim()
    } else {
        raw
    }
}
