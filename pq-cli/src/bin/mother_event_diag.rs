//! One-off diagnostic writeup for the missing-mother-event discrepancy
//!
//! Prints the findings from the investigation into mother events
//! disappearing from the dashboard so operators can reprint them without
//! digging through the tracker. It reads no live data and always exits
//! successfully.

fn main() {
    println!("═══════════════════════════════════════════════");
    println!("  Mother Event Visibility Diagnostic");
    println!("═══════════════════════════════════════════════");
    println!();
    println!("Symptom:");
    println!("  The dashboard shows fewer mother events than the backend");
    println!("  stores for the same period. The affected rows are voltage");
    println!("  dips that act as the representative of a correlated group.");
    println!();
    println!("Root cause:");
    println!("  The event list hides every record with false_event = true.");
    println!("  During grouping, a false flag raised on a sub-event is");
    println!("  propagated to its mother event, so the false-event rule ends");
    println!("  up hiding the mother row as well. Hiding false events and");
    println!("  hiding mother events are unrelated decisions; the filter");
    println!("  conflates them.");
    println!();
    println!("Remediation:");
    println!("  1. Exempt mother events from the false-event visibility rule.");
    println!("  2. Stop propagating false_event from sub-events to the mother");
    println!("     during grouping.");
    println!("  3. Re-run the monthly aggregation once the flags are");
    println!("     corrected: SARFI-70 totals exclude false events, so the");
    println!("     monthly figures will change.");
    println!();
    println!("No live data was queried to produce this report.");
}
