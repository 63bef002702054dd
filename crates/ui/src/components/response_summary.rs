use crate::theme::ThemePalette;

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Block, Cell, Paragraph, Row, Table},
};
use valueview_core::{QuestionStatements, QuestionTally, ResponseCounts};

/// Per-question distribution of parsed responses for the loaded dataset
pub struct ResponseSummaryPanel<'a> {
    counts: &'a ResponseCounts,
    statements: &'a QuestionStatements,
    dataset: Option<&'a str>,
    scroll: u16,
    theme: ThemePalette,
}

impl<'a> ResponseSummaryPanel<'a> {
    pub fn new(counts: &'a ResponseCounts, statements: &'a QuestionStatements, theme: ThemePalette) -> Self {
        Self { counts, statements, dataset: None, scroll: 0, theme }
    }

    pub fn with_dataset(mut self, dataset: Option<&'a str>) -> Self {
        self.dataset = dataset;
        self
    }

    pub fn with_scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let title = match self.dataset {
            Some(key) => format!(" Response Summary: {} ", key),
            None => " Response Summary ".to_string(),
        };
        let block = Block::bordered().title(title).border_style(self.theme.border()).style(self.theme.base());

        if self.counts.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(Paragraph::new("No responses to summarize.").style(self.theme.muted()), inner);
            return;
        }

        let with_statements = !self.statements.is_empty();
        let max_scroll = self.counts.question_count().saturating_sub(1);
        let skip = (self.scroll as usize).min(max_scroll);

        let rows: Vec<Row> = self.counts.tallies().skip(skip).map(|tally| self.row(&tally, with_statements)).collect();

        let mut header = vec!["Question", "Responses", "Total", "Most common"];
        let mut widths =
            vec![Constraint::Length(10), Constraint::Fill(2), Constraint::Length(6), Constraint::Length(12)];
        if with_statements {
            header.push("Statement");
            widths.push(Constraint::Fill(3));
        }

        let table = Table::new(rows, widths)
            .header(Row::new(header).style(self.theme.label()))
            .block(block)
            .column_spacing(2);
        frame.render_widget(table, area);
    }

    fn row(&self, tally: &QuestionTally<'_>, with_statements: bool) -> Row<'static> {
        let mut cells = vec![
            Cell::from(tally.question.to_string()),
            Cell::from(format_responses(tally)),
            Cell::from(tally.total().to_string()),
            Cell::from(tally.mode().unwrap_or_default().to_string()),
        ];
        if with_statements {
            let statement = self.statements.statement_for_key(tally.question).unwrap_or_default();
            cells.push(Cell::from(statement.to_string()));
        }
        Row::new(cells).style(self.theme.base())
    }
}

/// `A: 2  B: 1`
pub fn format_responses(tally: &QuestionTally<'_>) -> String {
    tally
        .responses
        .iter()
        .map(|(response, count)| format!("{}: {}", response, count))
        .collect::<Vec<_>>()
        .join("  ")
}
