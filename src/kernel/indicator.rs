//! Relative Strength Index over closing prices (Wilder smoothing).

pub const DEFAULT_RSI_PERIOD: usize = 14;

pub const OVERBOUGHT: f64 = 70.0;
pub const OVERSOLD: f64 = 30.0;

/// Ordered closing prices for one symbol. Append-only; non-finite values are
/// rejected so every stored point is usable by the indicator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    closes: Vec<f64>,
}

impl PriceSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a series from `values`, skipping non-finite entries.
    pub fn from_closes(values: impl IntoIterator<Item = f64>) -> Self {
        let mut series = Self::new();
        series.extend(values);
        series
    }

    /// Returns `false` (and stores nothing) for NaN or infinite prices.
    pub fn push(&mut self, close: f64) -> bool {
        if !close.is_finite() {
            return false;
        }
        self.closes.push(close);
        true
    }

    pub fn extend(&mut self, values: impl IntoIterator<Item = f64>) {
        for value in values {
            self.push(value);
        }
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.closes
    }

    pub fn last(&self) -> Option<f64> {
        self.closes.last().copied()
    }

    pub fn rsi(&self, period: usize) -> Option<f64> {
        relative_strength_index(&self.closes, period)
    }
}

/// RSI of `closes` for `period`, or `None` when `period == 0` or fewer than
/// `period + 1` prices are available.
///
/// Averages are seeded with the simple mean of the first `period` gains and
/// losses, then smoothed with `avg = (avg * (period - 1) + value) / period`.
/// A zero final average loss yields `100.0`.
pub fn relative_strength_index(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() <= period {
        return None;
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = closes
        .windows(2)
        .map(|pair| {
            let delta = pair[1] - pair[0];
            if delta > 0.0 {
                (delta, 0.0)
            } else {
                (0.0, -delta)
            }
        })
        .unzip();

    let n = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / n;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / n;

    for (gain, loss) in gains[period..].iter().zip(&losses[period..]) {
        avg_gain = (avg_gain * (n - 1.0) + gain) / n;
        avg_loss = (avg_loss * (n - 1.0) + loss) / n;
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiZone {
    Oversold,
    Neutral,
    Overbought,
}

impl RsiZone {
    pub fn classify(value: f64) -> Self {
        if value >= OVERBOUGHT {
            RsiZone::Overbought
        } else if value <= OVERSOLD {
            RsiZone::Oversold
        } else {
            RsiZone::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RsiZone::Oversold => "oversold",
            RsiZone::Neutral => "neutral",
            RsiZone::Overbought => "overbought",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/indicator.rs"]
mod tests;
