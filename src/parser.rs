//! The line-oriented input-file grammar (§6.1).

use crate::color::{ColorId, ColorTable};
use crate::error::SimError;
use crate::transition::{Rule, TransitionTableBuilder};

/// One fully-accumulated ant, ready to be simulated: its transition table,
/// background color, color alphabet (for printing symbols back out, e.g. by
/// the renderer), and step budget.
#[derive(Debug)]
pub struct ParsedAnt {
    pub table_builder: TransitionTableBuilder,
    pub colors: ColorTable,
    pub c0: ColorId,
    pub budget: u64,
}

/// A unit of progress while scanning the input file. Parsing itself performs
/// no I/O; `Comment` events are handed back to the caller (the CLI, per
/// §10.3) to echo verbatim. A malformed block reports `BlockFailed` but does
/// not abort parsing of the rest of the file (§10.2): the block is discarded
/// and scanning resumes at its terminating step-count line.
#[derive(Debug)]
pub enum ParseEvent {
    Comment(String),
    AntReady(ParsedAnt),
    BlockFailed(SimError),
}

/// Accumulates DNA lines for the ant currently being read.
#[derive(Default)]
struct Accumulator {
    table_builder: TransitionTableBuilder,
    colors: ColorTable,
    c0: Option<ColorId>,
    poisoned: bool,
}

impl Accumulator {
    fn add_dna_line(&mut self, line: &str) -> Result<(), SimError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(SimError::MalformedDnaLine(line.to_string()));
        }
        let color_tok = tokens[0];
        let dirs = tokens[1];
        let states = tokens[2];

        let mut color_chars = color_tok.chars();
        let color_char = color_chars
            .next()
            .filter(|_| color_chars.next().is_none())
            .ok_or_else(|| SimError::MalformedDnaLine(line.to_string()))?;

        if dirs.chars().count() != 4 || states.chars().count() != 4 {
            return Err(SimError::MalformedDnaLine(line.to_string()));
        }

        let mut next_heading = [crate::heading::Heading::N; 4];
        for (i, c) in dirs.chars().enumerate() {
            next_heading[i] = crate::heading::Heading::from_char(c)
                .ok_or_else(|| SimError::MalformedDnaLine(line.to_string()))?;
        }

        let source_color = self.colors.intern(color_char);
        if self.c0.is_none() {
            self.c0 = Some(source_color);
        }

        let mut next_color = [ColorId(0); 4];
        for (i, c) in states.chars().enumerate() {
            next_color[i] = self.colors.intern(c);
        }

        self.table_builder.set_rule(source_color, Rule { next_heading, next_color });
        Ok(())
    }

    fn finish(self, budget: u64) -> Result<ParsedAnt, SimError> {
        let c0 = self.c0.ok_or_else(|| SimError::MalformedDnaLine("empty ant block".to_string()))?;
        Ok(ParsedAnt {
            table_builder: self.table_builder,
            colors: self.colors,
            c0,
            budget,
        })
    }
}

fn is_step_count_line(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit() || c.is_whitespace())
}

/// Parses the full contents of an input file into a sequence of events, in
/// file order. A trailing, unterminated DNA block (no step-count line before
/// EOF) is silently dropped, matching the reference grammar's
/// "block terminates on the step-count line" rule: there is nothing to do
/// with an ant that was never given a budget.
pub fn parse(input: &str) -> Vec<ParseEvent> {
    let mut events = Vec::new();
    let mut current = Accumulator::default();

    for raw_line in input.lines() {
        let line = raw_line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            events.push(ParseEvent::Comment(format!("#{comment}")));
            continue;
        }

        if is_step_count_line(line) {
            let budget: u64 = match line.split_whitespace().next().unwrap_or("0").parse() {
                Ok(budget) => budget,
                Err(_) => {
                    events.push(ParseEvent::BlockFailed(SimError::MalformedDnaLine(line.to_string())));
                    current = Accumulator::default();
                    continue;
                }
            };
            let finished = std::mem::take(&mut current);
            if !finished.poisoned {
                match finished.finish(budget) {
                    Ok(ant) => events.push(ParseEvent::AntReady(ant)),
                    Err(err) => events.push(ParseEvent::BlockFailed(err)),
                }
            }
            continue;
        }

        if current.poisoned {
            continue;
        }
        if let Err(err) = current.add_dna_line(line) {
            events.push(ParseEvent::BlockFailed(err));
            current.poisoned = true;
        }
    }

    // An unterminated trailing block (DNA lines with no following step-count
    // line) has no budget to run with and is silently dropped here.
    events
}
