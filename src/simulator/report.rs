//! Human-readable and JSON renderings of a run's statistics.

use super::stats::Statistics;

/// Significant digits used for percentages in the text report.
pub const REPORT_PRECISION: usize = 5;

/// Format `value` with `digits` significant digits, `%g` style.
///
/// Trailing zeros are trimmed, very large or small magnitudes switch to
/// exponent notation, and NaN prints as `nan`.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.max(1);
    // Exponent after rounding, so 99.9996 counts as 100
    let rounded = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = match rounded.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse::<i32>().unwrap_or(0)),
        None => (rounded.clone(), 0),
    };

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(&mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value))
    }
}

fn trim_zeros(number: &str) -> String {
    if number.contains('.') {
        number
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        number.to_string()
    }
}

impl Statistics {
    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let pct = |v: f64| format_significant(v, REPORT_PRECISION);
        let mut report = String::new();

        report.push_str("Game statistics:\n\n");
        report.push_str(&format!("Total games: {}\n", self.games));
        report.push_str(&format!(
            "Smart players ({}%): {}\n",
            pct(self.switch.per_players),
            self.switch.players
        ));
        report.push_str(&format!(
            "Common players ({}%): {}\n",
            pct(self.stay.per_players),
            self.stay.players
        ));
        report.push_str(&format!(
            "Smart players winners ({}%): {}\n",
            pct(self.switch.per_winners),
            self.switch.winners
        ));
        report.push_str(&format!(
            "Common players winners ({}%): {}\n",
            pct(self.stay.per_winners),
            self.stay.winners
        ));

        report
    }

    /// Generate a JSON report. Undefined percentages become `null`.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
