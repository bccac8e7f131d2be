//! Routes classified input into the calculator and pushes every resulting
//! display to a render sink.

use crate::calculator::{Calculator, Input, copy_result};
use crate::render::RenderSink;

/// A running calculator session.
pub struct Session<S: RenderSink> {
    calculator: Calculator,
    sink: S,
    copy_on_equals: bool,
}

impl<S: RenderSink> Session<S> {
    pub fn new(calculator: Calculator, sink: S) -> Self {
        Self {
            calculator,
            sink,
            copy_on_equals: false,
        }
    }

    /// Copy finite results to the clipboard whenever equals is pressed.
    pub fn with_copy_on_equals(mut self, enabled: bool) -> Self {
        self.copy_on_equals = enabled;
        self
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Push the current display without any input, e.g. for the first frame.
    pub fn refresh(&mut self) -> anyhow::Result<()> {
        self.sink.render(self.calculator.display_value())
    }

    /// Handle one input to completion and render the result.
    pub fn dispatch(&mut self, input: Input) -> anyhow::Result<()> {
        let shown = self.calculator.handle(input);
        tracing::debug!(?input, display = shown, "dispatched input");
        self.sink.render(shown)?;

        if input.is_equals() && self.copy_on_equals {
            match copy_result(self.calculator.display_value()) {
                Ok(()) => tracing::info!(
                    result = self.calculator.display_value(),
                    "copied result to clipboard"
                ),
                Err(e) => tracing::warn!("{}", e),
            }
        }

        Ok(())
    }

    /// Dispatch a sequence of inputs in order.
    pub fn run<I: IntoIterator<Item = Input>>(&mut self, inputs: I) -> anyhow::Result<()> {
        for input in inputs {
            self.dispatch(input)?;
        }
        Ok(())
    }

    pub fn into_parts(self) -> (Calculator, S) {
        (self.calculator, self.sink)
    }
}
