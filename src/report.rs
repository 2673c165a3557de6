//! Human readable output.

use std::io::{self, Write};

use crate::harness::Measurement;

/// Write the three metric lines (time, throughput, checksum) for one index.
pub fn write_measurement<W: Write>(out: &mut W, m: &Measurement) -> io::Result<()> {
    writeln!(out, "{} time = {:.6}", m.kind, m.seconds())?;
    writeln!(out, "{} tput = {:.3} Mops/s", m.kind, m.mops())?;
    writeln!(out, "{} sum = {}", m.kind, m.checksum)
}

/// Write the metric lines for every measurement, in order.
pub fn write_report<W: Write>(out: &mut W, measurements: &[Measurement]) -> io::Result<()> {
    for m in measurements {
        write_measurement(out, m)?;
    }
    Ok(())
}

/// Write a one-row-per-index table including build cost.
pub fn write_summary<W: Write>(out: &mut W, measurements: &[Measurement]) -> io::Result<()> {
    writeln!(
        out,
        "{:<24} {:>10} {:>12} {:>12} {:>12}",
        "Index", "Build ms", "Memory MB", "Lookup Mops", "Hits"
    )?;
    writeln!(out, "{}", "-".repeat(74))?;
    for m in measurements {
        let (build_ms, memory) = match m.build {
            Some(build) => (
                format!("{:.1}", build.elapsed.as_secs_f64() * 1e3),
                build
                    .bytes
                    .map(|b| format!("{:.1}", b as f64 / (1024.0 * 1024.0)))
                    .unwrap_or_else(|| "-".into()),
            ),
            None => ("-".into(), "-".into()),
        };
        writeln!(
            out,
            "{:<24} {:>10} {:>12} {:>12.3} {:>12}",
            m.kind.to_string(),
            build_ms,
            memory,
            m.mops(),
            m.hits
        )?;
    }
    Ok(())
}
