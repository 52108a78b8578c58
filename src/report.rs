//! Plain-text report rendering.
//!
//! Renders a title, a Gantt chart and the timing table of a
//! [`SimulationOutcome`] to any [`io::Write`] sink. The engines do not
//! depend on anything here.
//!
//! ```text
//! Gantt schedule
//! |   P1   |   P2   |
//! 0        5        8
//! ```

use std::io::{self, Write};

use crate::models::Timeline;
use crate::scheduler::SimulationOutcome;

const TABLE_HEADERS: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

/// Layout settings for text reports.
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    gantt_cell_width: usize,
    column_width: usize,
}

impl ReportFormatter {
    /// Creates a formatter with default widths.
    pub fn new() -> Self {
        Self {
            gantt_cell_width: 8,
            column_width: 11,
        }
    }

    /// Sets the minimum width of one Gantt bar.
    pub fn with_gantt_cell_width(mut self, width: usize) -> Self {
        self.gantt_cell_width = width;
        self
    }

    /// Sets the width of each table column.
    pub fn with_column_width(mut self, width: usize) -> Self {
        self.column_width = width;
        self
    }

    /// Writes title, Gantt chart and timing table.
    pub fn write<W: Write>(
        &self,
        w: &mut W,
        title: &str,
        outcome: &SimulationOutcome,
    ) -> io::Result<()> {
        self.write_title(w, title)?;
        self.write_gantt(w, &outcome.timeline)?;
        self.write_table(w, outcome)
    }

    /// Writes a framed title line.
    pub fn write_title<W: Write>(&self, w: &mut W, title: &str) -> io::Result<()> {
        let rule = "-".repeat(self.table_width().max(title.len()));
        writeln!(w, "{rule}")?;
        writeln!(w, "{title:^width$}", width = rule.len())?;
        writeln!(w, "{rule}")
    }

    /// Writes the Gantt chart: one row of bars, one row of boundaries.
    pub fn write_gantt<W: Write>(&self, w: &mut W, timeline: &Timeline) -> io::Result<()> {
        writeln!(w, "Gantt schedule")?;
        if timeline.is_empty() {
            writeln!(w, "(empty)")?;
            return writeln!(w);
        }

        let mut bars = String::from("|");
        let mut times = String::new();
        for slice in timeline {
            let width = self.gantt_cell_width.max(slice.process_id.len() + 2);
            bars.push_str(&format!("{:^width$}|", slice.process_id));
            times.push_str(&format!("{:<w$}", slice.start_time, w = width + 1));
        }
        times.push_str(&timeline.makespan().to_string());

        writeln!(w, "{bars}")?;
        writeln!(w, "{times}")?;
        writeln!(w)
    }

    /// Writes the timing table with its averages footer.
    pub fn write_table<W: Write>(&self, w: &mut W, outcome: &SimulationOutcome) -> io::Result<()> {
        let cw = self.column_width;
        writeln!(w, "Schedule table")?;

        let header: String = TABLE_HEADERS.iter().map(|h| format!("{h:>cw$}")).collect();
        writeln!(w, "{header}")?;
        writeln!(w, "{}", "-".repeat(self.table_width()))?;

        for row in &outcome.rows {
            writeln!(
                w,
                "{:>cw$}{:>cw$}{:>cw$}{:>cw$}{:>cw$}{:>cw$}{:>cw$}",
                row.id,
                row.priority,
                row.burst_duration,
                row.arrival_time,
                row.wait_time,
                row.turnaround_time,
                row.completion_time,
            )?;
        }

        writeln!(w, "{}", "-".repeat(self.table_width()))?;
        let kpi = &outcome.kpi;
        writeln!(
            w,
            "{:>cw$}{:>cw$}{:>cw$}{:>cw$}{:>cw$}{:>cw$}{:>cw$}",
            "Average",
            "",
            "",
            "",
            format!("{:.2}", kpi.average_wait),
            format!("{:.2}", kpi.average_turnaround),
            format!("{:.2}/t", kpi.throughput),
        )
    }

    fn table_width(&self) -> usize {
        self.column_width * TABLE_HEADERS.len()
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes a report with the default layout.
pub fn write_report<W: Write>(w: &mut W, title: &str, outcome: &SimulationOutcome) -> io::Result<()> {
    ReportFormatter::new().write(w, title, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, Timeslice};
    use crate::scheduler::FcfsScheduler;

    fn render(outcome: &SimulationOutcome) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, "First-come, first-serve", outcome).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample_outcome() -> SimulationOutcome {
        let procs = vec![
            Process::new("P1").with_arrival(0).with_burst(5).with_priority(2),
            Process::new("P2").with_arrival(1).with_burst(3).with_priority(1),
        ];
        FcfsScheduler::new().run(&procs).unwrap()
    }

    #[test]
    fn test_gantt_rows() {
        let mut buf = Vec::new();
        ReportFormatter::new()
            .write_gantt(&mut buf, &sample_outcome().timeline)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Gantt schedule");
        assert_eq!(lines[1], "|   P1   |   P2   |");
        assert_eq!(lines[2], "0        5        8");
    }

    #[test]
    fn test_gantt_widens_for_long_ids() {
        let mut timeline = Timeline::new();
        timeline.push(Timeslice::new("compiler", 0, 2));
        let mut buf = Vec::new();
        ReportFormatter::new()
            .with_gantt_cell_width(4)
            .write_gantt(&mut buf, &timeline)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("| compiler |"));
    }

    #[test]
    fn test_report_contains_title_rows_and_footer() {
        let text = render(&sample_outcome());
        assert!(text.contains("First-come, first-serve"));
        assert!(text.contains("Turnaround"));
        let p2_line = text.lines().find(|l| l.trim_start().starts_with("P2")).unwrap();
        let cells: Vec<&str> = p2_line.split_whitespace().collect();
        assert_eq!(cells, vec!["P2", "1", "3", "1", "4", "7", "8"]);
        let footer = text.lines().last().unwrap();
        assert!(footer.contains("Average"));
        assert!(footer.contains("2.00"));
        assert!(footer.contains("6.00"));
        assert!(footer.contains("0.25/t"));
    }

    #[test]
    fn test_empty_report() {
        let outcome = FcfsScheduler::new().run(&[]).unwrap();
        let text = render(&outcome);
        assert!(text.contains("(empty)"));
        assert!(text.contains("0.00/t"));
    }
}
