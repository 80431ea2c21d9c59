//! Text bar chart of per-stock investment scores

use crate::scorer::StockScore;

/// Widest bar on either side of the axis
const MAX_BAR: usize = 30;

fn bar_len(score: i64, scale: f64) -> usize {
    if score == 0 {
        return 0;
    }
    ((score.unsigned_abs() as f64 * scale).round() as usize).max(1)
}

/// Horizontal bars around a zero axis; negative scores grow to the left
pub fn render_score_chart(title: &str, scores: &[StockScore]) -> String {
    let mut output = format!("{title}\n");
    if scores.is_empty() {
        output.push_str("  (no stocks scored)\n");
        return output;
    }

    let largest = scores
        .iter()
        .map(|s| s.score.unsigned_abs())
        .max()
        .unwrap_or(0);
    let scale = if largest as usize > MAX_BAR {
        MAX_BAR as f64 / largest as f64
    } else {
        1.0
    };

    let label_width = scores.iter().map(|s| s.symbol.len()).max().unwrap_or(0);
    let left_width = scores
        .iter()
        .filter(|s| s.score < 0)
        .map(|s| bar_len(s.score, scale))
        .max()
        .unwrap_or(0);

    for entry in scores {
        let len = bar_len(entry.score, scale);
        let (left, right) = if entry.score < 0 {
            ("#".repeat(len), String::new())
        } else {
            (String::new(), "#".repeat(len))
        };
        output.push_str(&format!(
            "  {:<label_width$} {:>left_width$}|{} {}\n",
            entry.symbol, left, right, entry.score
        ));
    }
    output
}
