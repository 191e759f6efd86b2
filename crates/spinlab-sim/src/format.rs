//! Status line and summary rendering

use crate::stats::SimTotals;

/// Group an integer with thousands separators
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a non-negative currency amount: two decimals, grouped
pub fn format_currency(amount: f64) -> String {
    let rendered = format!("{amount:.2}");
    let Some((whole, cents)) = rendered.split_once('.') else {
        return rendered;
    };
    match whole.parse::<u64>() {
        Ok(whole) => format!("{}.{cents}", group_thousands(whole)),
        // Totals are non-negative by invariant; leave anything else as-is
        Err(_) => rendered.clone(),
    }
}

/// One periodic status line
pub fn status_line(totals: &SimTotals) -> String {
    format!(
        "Spins: {} | RTP: {:.4}% | Wagered: ${} | Won: ${}",
        group_thousands(totals.spins),
        totals.rtp(),
        format_currency(totals.wagered),
        format_currency(totals.won),
    )
}

/// The final results block printed at shutdown
pub fn final_summary(totals: &SimTotals) -> String {
    format!(
        "=== FINAL RESULTS ===\n\
         Total Spins: {}\n\
         Total Wagered: ${}\n\
         Total Won: ${}\n\
         Final RTP: {:.6}%\n\
         House Edge: {:.6}%",
        group_thousands(totals.spins),
        format_currency(totals.wagered),
        format_currency(totals.won),
        totals.rtp(),
        totals.house_edge(),
    )
}
