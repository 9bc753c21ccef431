/// A module-pattern accumulator: only the three named operations can
/// reach the stored value.
///
/// The hidden variable is a private field, so the field's privacy gives
/// the same guarantee a closure-captured binding would.
#[derive(Debug, Default)]
pub struct Calculator {
    value: i64,
}

impl Calculator {
    /// Amount applied by `increment` and `decrement`. Fixed, never
    /// caller-supplied.
    const STEP: i64 = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the step to the accumulator.
    pub fn increment(&mut self) {
        self.change_by(Self::STEP);
    }

    /// Subtracts the step from the accumulator.
    pub fn decrement(&mut self) {
        self.change_by(-Self::STEP);
    }

    /// Reads the accumulator without mutating it.
    pub fn value(&self) -> i64 {
        self.value
    }

    fn change_by(&mut self, delta: i64) {
        self.value += delta;
    }
}
