//! Best-effort STAR section parser for behavioral answers.
//!
//! The model is asked to answer with `Situation:`, `Task:`, `Action:` and
//! `Result:` labels. This is a line scanner, not a grammar: it tolerates
//! extra prose and Markdown emphasis but relies on the labels being present.

use serde::{Deserialize, Serialize};

/// A behavioral answer split into STAR sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRecord {
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
}

impl StarRecord {
    /// True when no section received any text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.situation.is_empty()
            && self.task.is_empty()
            && self.action.is_empty()
            && self.result.is_empty()
    }

    fn section_mut(&mut self, section: StarSection) -> &mut String {
        match section {
            StarSection::Situation => &mut self.situation,
            StarSection::Task => &mut self.task,
            StarSection::Action => &mut self.action,
            StarSection::Result => &mut self.result,
        }
    }
}

/// One of the four STAR sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarSection {
    Situation,
    Task,
    Action,
    Result,
}

impl StarSection {
    const ALL: [Self; 4] = [Self::Situation, Self::Task, Self::Action, Self::Result];

    /// Label that opens this section, including the colon.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Situation => "situation:",
            Self::Task => "task:",
            Self::Action => "action:",
            Self::Result => "result:",
        }
    }

    /// If `line` starts with a section label (ASCII case-insensitive),
    /// return the section and the remainder after the label.
    fn match_label(line: &str) -> Option<(Self, &str)> {
        Self::ALL.into_iter().find_map(|section| {
            let label = section.label();
            let head = line.get(..label.len())?;
            head.eq_ignore_ascii_case(label)
                .then(|| (section, &line[label.len()..]))
        })
    }
}

/// Parse a formatted behavioral answer into its STAR sections.
///
/// Every `**` emphasis marker is removed first. A labelled line switches the
/// current section and replaces its content with the rest of the line; an
/// unlabelled line is appended to the current section with a single space.
/// A section that is still empty takes the line as is, so a label on its own
/// line does not leave a leading space in the section text.
/// Lines before the first label are dropped. Never fails; text without any
/// label yields an empty record.
#[must_use]
pub fn parse_star(text: &str) -> StarRecord {
    let mut star = StarRecord::default();
    let mut current: Option<StarSection> = None;

    let cleaned = text.replace("**", "");

    for line in cleaned.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((section, rest)) = StarSection::match_label(line) {
            current = Some(section);
            *star.section_mut(section) = rest.trim().to_string();
        } else if let Some(section) = current {
            let slot = star.section_mut(section);
            if !slot.is_empty() {
                slot.push(' ');
            }
            slot.push_str(line);
        }
    }

    star
}
