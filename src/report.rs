use std::fmt;

use crate::ledger::Ledger;

/// Human-readable summary over the pipeline's ledger: totals, the first few
/// entries of each kind, and remediation hints.
pub struct RepairReport<'a> {
    ledger: &'a Ledger,
    limit: usize,
}

impl<'a> RepairReport<'a> {
    pub fn new(ledger: &'a Ledger, limit: usize) -> Self {
        Self { ledger, limit }
    }
}

impl fmt::Display for RepairReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixes = &self.ledger.fixes;
        let errors = &self.ledger.errors;

        writeln!(f, "Repair summary:")?;
        writeln!(f, "  fixes applied: {}", fixes.len())?;
        writeln!(f, "  errors found:  {}", errors.len())?;

        if !fixes.is_empty() {
            writeln!(f, "\nFixes:")?;
            for (n, fix) in fixes.iter().take(self.limit).enumerate() {
                match fix.line {
                    Some(line) => writeln!(f, "  {}. {} (line {})", n + 1, fix.message, line)?,
                    None => writeln!(f, "  {}. {}", n + 1, fix.message)?,
                }
            }
            if fixes.len() > self.limit {
                writeln!(f, "  ... and {} more fixes", fixes.len() - self.limit)?;
            }
        }

        if !errors.is_empty() {
            writeln!(f, "\nErrors (first {} shown):", self.limit.min(errors.len()))?;
            for (n, err) in errors.iter().take(self.limit).enumerate() {
                writeln!(f, "  {}. {}", n + 1, err.message)?;
                if let Some(snippet) = &err.snippet {
                    writeln!(f, "     {}", snippet)?;
                }
            }
            if errors.len() > self.limit {
                writeln!(f, "  ... and {} more errors", errors.len() - self.limit)?;
            }
        }

        writeln!(f, "\nHints:")?;
        if !errors.is_empty() {
            writeln!(f, "  - remaining problems are mostly unescaped quotes in HTML content")?;
            writeln!(f, "  - these need manual editing: escape quotes in HTML as \\\"")?;
        }
        if !fixes.is_empty() {
            writeln!(f, "  - the file was partially repaired; a backup of the original was kept")?;
        }
        if errors.is_empty() && fixes.is_empty() {
            writeln!(f, "  - the document was already well-formed, nothing to do")?;
        }
        Ok(())
    }
}
