//! Demonstration seam: each closure pattern is wrapped in a [`Demo`]
//! that writes its transcript section to a caller-supplied sink.

use std::io::{self, Write};

use miette::Diagnostic;
use thiserror::Error;

use crate::calculator::Calculator;
use crate::counter::make_counter;
use crate::scope::make_reporter;

#[derive(Debug, Error, Diagnostic)]
pub enum DemoError {
    #[error("unknown demonstration `{name}`")]
    #[diagnostic(help("available demonstrations: {available}"))]
    Unknown { name: String, available: String },

    #[error("failed to write demonstration output")]
    Io(#[from] io::Error),
}

/// A single self-contained demonstration.
pub trait Demo {
    /// Name used both for selection and as the transcript header.
    fn name(&self) -> &'static str;

    /// Runs the demonstration once, writing its section of the
    /// transcript to `out`.
    fn run(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Scope-capturing function pair: a constructed closure reports the
/// value that was in its enclosing scope at construction time.
struct ScopeDemo;

impl Demo for ScopeDemo {
    fn name(&self) -> &'static str {
        "myFunction"
    }

    fn run(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}:", self.name())?;
        let my_function = make_reporter();
        my_function(out)
    }
}

/// Stateful counter generator: the count survives between calls
/// because the closure owns it, not the call frame.
struct CounterDemo;

impl Demo for CounterDemo {
    fn name(&self) -> &'static str {
        "counter"
    }

    fn run(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}:", self.name())?;
        let mut counter = make_counter();
        writeln!(out, "{}", counter())?;
        writeln!(out, "{}", counter())
    }
}

/// Module-pattern accumulator: only the exposed operations can reach
/// the private value.
struct CalculatorDemo;

impl Demo for CalculatorDemo {
    fn name(&self) -> &'static str {
        "calculatorModule"
    }

    fn run(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}:", self.name())?;
        let mut calculator = Calculator::new();
        writeln!(out, "{}", calculator.value())?;
        calculator.increment();
        calculator.increment();
        writeln!(out, "{}", calculator.value())?;
        calculator.decrement();
        writeln!(out, "{}", calculator.value())
    }
}

/// All demonstrations, in transcript order.
pub fn all() -> Vec<Box<dyn Demo>> {
    vec![Box::new(ScopeDemo), Box::new(CounterDemo), Box::new(CalculatorDemo)]
}

/// Runs every demonstration in order against `out`.
pub fn run_all(out: &mut dyn Write) -> Result<(), DemoError> {
    for demo in all() {
        demo.run(out)?;
    }
    Ok(())
}

/// Runs the named demonstrations, in the order requested.
pub fn run_named<S: AsRef<str>>(names: &[S], out: &mut dyn Write) -> Result<(), DemoError> {
    let demos = all();

    for name in names {
        let name = name.as_ref();
        let demo = demos
            .iter()
            .find(|d| d.name() == name)
            .ok_or_else(|| DemoError::Unknown {
                name: name.to_string(),
                available: demos
                    .iter()
                    .map(|d| d.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;
        demo.run(out)?;
    }
    Ok(())
}
