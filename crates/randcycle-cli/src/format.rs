//! Result formatting: human-readable and JSON modes.
//!
//! Each command's stdout payload is produced here, writing to any
//! `std::io::Write` sink so tests can capture output in a buffer.
//!
//! - **Human mode** (default): a one-line arrow-joined cycle, or aligned
//!   key/value lines for `inspect`.
//! - **JSON mode**: a single JSON object per command.

use std::io::Write;

use randcycle_core::DegreeStats;

// ---------------------------------------------------------------------------
// sample output
// ---------------------------------------------------------------------------

/// Writes a found cycle in human form:
/// `cycle found (5 edges): B -> A -> C -> F -> E -> B`.
pub fn write_cycle_human(out: &mut impl Write, cycle: &[String]) -> std::io::Result<()> {
    let edges = cycle.len().saturating_sub(1);
    writeln!(out, "cycle found ({edges} edges): {}", cycle.join(" -> "))
}

/// Writes a found cycle as a single JSON object:
/// `{"found":true,"cycle":[...],"length":5}`.
pub fn write_cycle_json(out: &mut impl Write, cycle: &[String]) -> std::io::Result<()> {
    let obj = serde_json::json!({
        "found": true,
        "cycle": cycle,
        "length": cycle.len().saturating_sub(1),
    });
    writeln!(out, "{obj}")
}

/// Writes the JSON not-found object: `{"found":false,"attempts":N}`.
///
/// Human mode has no stdout payload for not-found; the message goes to
/// stderr via the error path.
pub fn write_not_found_json(out: &mut impl Write, attempts: usize) -> std::io::Result<()> {
    let obj = serde_json::json!({
        "found": false,
        "attempts": attempts,
    });
    writeln!(out, "{obj}")
}

// ---------------------------------------------------------------------------
// inspect output
// ---------------------------------------------------------------------------

/// Writes graph statistics as aligned key/value lines.
pub fn write_stats_human(out: &mut impl Write, stats: &DegreeStats) -> std::io::Result<()> {
    writeln!(out, "vertices:        {}", stats.vertex_count)?;
    writeln!(out, "edges:           {}", stats.edge_count)?;
    writeln!(out, "self-loops:      {}", stats.self_loop_count)?;
    writeln!(out, "min out-degree:  {}", stats.min_out_degree)?;
    writeln!(out, "max out-degree:  {}", stats.max_out_degree)?;
    writeln!(out, "mean out-degree: {:.2}", stats.mean_out_degree)
}

/// Writes graph statistics as a single JSON object.
pub fn write_stats_json(out: &mut impl Write, stats: &DegreeStats) -> std::io::Result<()> {
    let obj = serde_json::json!({
        "vertices": stats.vertex_count,
        "edges": stats.edge_count,
        "self_loops": stats.self_loop_count,
        "min_out_degree": stats.min_out_degree,
        "max_out_degree": stats.max_out_degree,
        "mean_out_degree": stats.mean_out_degree,
    });
    writeln!(out, "{obj}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("write to Vec cannot fail");
        String::from_utf8(buf).expect("output is UTF-8")
    }

    #[test]
    fn cycle_human_is_arrow_joined() {
        let cycle: Vec<String> = ["B", "A", "C", "B"].iter().map(|s| (*s).to_owned()).collect();
        let text = capture(|out| write_cycle_human(out, &cycle));
        assert_eq!(text, "cycle found (3 edges): B -> A -> C -> B\n");
    }

    #[test]
    fn cycle_json_has_found_length_and_cycle() {
        let cycle: Vec<String> = ["A", "B", "A"].iter().map(|s| (*s).to_owned()).collect();
        let text = capture(|out| write_cycle_json(out, &cycle));
        let v: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(v["found"], true);
        assert_eq!(v["length"], 2);
        assert_eq!(v["cycle"][0], "A");
    }

    #[test]
    fn not_found_json_reports_attempts() {
        let text = capture(|out| write_not_found_json(out, 77));
        let v: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(v["found"], false);
        assert_eq!(v["attempts"], 77);
    }

    #[test]
    fn stats_human_lists_all_fields() {
        let stats = DegreeStats {
            vertex_count: 3,
            edge_count: 4,
            self_loop_count: 1,
            min_out_degree: 0,
            max_out_degree: 3,
            mean_out_degree: 4.0 / 3.0,
        };
        let text = capture(|out| write_stats_human(out, &stats));
        assert!(text.contains("vertices:        3"));
        assert!(text.contains("mean out-degree: 1.33"));
    }

    #[test]
    fn stats_json_round_trips() {
        let stats = DegreeStats {
            vertex_count: 2,
            edge_count: 2,
            self_loop_count: 0,
            min_out_degree: 1,
            max_out_degree: 1,
            mean_out_degree: 1.0,
        };
        let text = capture(|out| write_stats_json(out, &stats));
        let v: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(v["vertices"], 2);
        assert_eq!(v["self_loops"], 0);
    }
}
