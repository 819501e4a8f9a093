/// A raw output line.
///
/// Writes go through a shared reference because the same line is driven
/// from thread mode and from the timer interrupt. Implementations must not
/// block.
pub trait Line {
    fn drive(&self, high: bool);
}

impl<T: Line + ?Sized> Line for &T {
    fn drive(&self, high: bool) {
        (**self).drive(high)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Line level that puts the indicator in the `lit` state.
    pub const fn level(self, lit: bool) -> bool {
        match self {
            Polarity::ActiveHigh => lit,
            Polarity::ActiveLow => !lit,
        }
    }
}

/// An on/off indicator with its polarity folded away.
pub struct Indicator<L> {
    line: L,
    polarity: Polarity,
}

impl<L: Line> Indicator<L> {
    pub const fn new(line: L, polarity: Polarity) -> Self {
        Self { line, polarity }
    }

    pub fn on(&self) {
        self.set(true);
    }

    pub fn off(&self) {
        self.set(false);
    }

    pub fn set(&self, lit: bool) {
        self.line.drive(self.polarity.level(lit));
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn line(&self) -> &L {
        &self.line
    }
}
