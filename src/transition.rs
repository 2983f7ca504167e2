//! The per-color rewrite rules governing one ant (its "DNA").

use crate::color::ColorId;
use crate::heading::Heading;

/// One row of the transition table: for each incoming heading, the new
/// heading and new color to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub next_heading: [Heading; 4],
    pub next_color: [ColorId; 4],
}

impl Rule {
    pub fn for_heading(&self, heading: Heading) -> (Heading, ColorId) {
        let i = heading.index();
        (self.next_heading[i], self.next_color[i])
    }
}

/// A mutable builder the parser fills in while reading one ant's DNA block.
/// Taken by value into an immutable [`TransitionTable`] once the block is
/// complete, matching the "parser produces a mutable builder, simulator
/// takes an immutable snapshot" ownership split (§9 design note).
#[derive(Debug, Clone, Default)]
pub struct TransitionTableBuilder {
    rows: Vec<Option<Rule>>,
}

impl TransitionTableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Records the rule for `color`, growing the backing storage if this is
    /// a color id higher than any seen before.
    pub fn set_rule(&mut self, color: ColorId, rule: Rule) {
        if self.rows.len() <= color.0 as usize {
            self.rows.resize(color.0 as usize + 1, None);
        }
        self.rows[color.0 as usize] = Some(rule);
    }

    /// Finalizes the builder into an immutable table. `num_colors` is the
    /// total number of colors interned for this ant (from the parser's
    /// [`crate::color::ColorTable`]) — every one of them must have a rule,
    /// since every color that can appear as `C0` or as any `next_color` must
    /// have an entry (§3).
    pub fn build(self, num_colors: usize) -> Result<TransitionTable, ColorId> {
        let mut rows = self.rows;
        if rows.len() < num_colors {
            rows.resize(num_colors, None);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.is_none() {
                return Err(ColorId(i as u16));
            }
        }
        let rows = rows.into_iter().map(|r| r.unwrap()).collect();
        Ok(TransitionTable { rows })
    }
}

/// Immutable per-color rewrite rules. Deep-copied into each [`crate::simulator::Simulator`]
/// so parser mutation between ants cannot alias a running ant's table.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    rows: Vec<Rule>,
}

impl TransitionTable {
    /// Looks up the rule for `color`, or `None` if this table has no entry
    /// for it (the `UnknownColor` case, §7).
    pub fn lookup(&self, color: ColorId, heading: Heading) -> Option<(Heading, ColorId)> {
        self.rows.get(color.0 as usize).map(|rule| rule.for_heading(heading))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heading::Heading::*;

    fn straight_rule() -> Rule {
        Rule {
            next_heading: [N, E, S, W],
            next_color: [ColorId(0); 4],
        }
    }

    #[test]
    fn build_fails_on_missing_color() {
        let mut builder = TransitionTableBuilder::new();
        builder.set_rule(ColorId(0), straight_rule());
        // color 1 never given a rule
        let err = builder.build(2).unwrap_err();
        assert_eq!(err, ColorId(1));
    }

    #[test]
    fn build_succeeds_when_complete() {
        let mut builder = TransitionTableBuilder::new();
        builder.set_rule(ColorId(0), straight_rule());
        let table = builder.build(1).unwrap();
        assert_eq!(table.lookup(ColorId(0), N), Some((N, ColorId(0))));
        assert_eq!(table.lookup(ColorId(1), N), None);
    }
}
