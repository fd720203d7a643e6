//! Category bar charts
//!
//! Builds a bar chart from per-category totals and draws it with ratatui.
//! [`terminal::show`] puts the chart on screen and waits for the user.

pub mod terminal;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Paragraph},
    Frame,
};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{EntryKind, Money};
use crate::reports::CategoryTotals;

const GROUP_GAP: u16 = 3;
const BAR_GAP: u16 = 1;
const MAX_BAR_WIDTH: u16 = 12;

/// Which chart to build from the category totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ChartStyle {
    /// Income and expense bars side by side
    Grouped,
    /// A single expense bar per category
    Expenses,
}

impl ChartStyle {
    pub fn build(self, totals: &CategoryTotals) -> BudgetResult<CategoryChart> {
        match self {
            ChartStyle::Grouped => CategoryChart::grouped(totals),
            ChartStyle::Expenses => CategoryChart::expenses(totals),
        }
    }
}

/// One bar group: a category and one value per series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartGroup {
    pub label: String,
    pub values: Vec<Money>,
}

/// A bar chart of amounts by category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChart {
    title: String,
    series: Vec<EntryKind>,
    groups: Vec<ChartGroup>,
}

impl CategoryChart {
    /// Income and expense side by side for every category
    ///
    /// A category with only one kind still gets a zero bar for the other.
    pub fn grouped(totals: &CategoryTotals) -> BudgetResult<Self> {
        if totals.is_empty() {
            return Err(BudgetError::NothingToPlot);
        }

        let groups = totals
            .rows()
            .iter()
            .map(|row| ChartGroup {
                label: row.category.clone(),
                values: vec![row.income, row.expense],
            })
            .collect();

        Ok(Self {
            title: "Income and Expenses by Category".to_string(),
            series: vec![EntryKind::Income, EntryKind::Expense],
            groups,
        })
    }

    /// A single expense bar per category
    pub fn expenses(totals: &CategoryTotals) -> BudgetResult<Self> {
        let groups: Vec<ChartGroup> = totals
            .expense_only()
            .into_iter()
            .map(|(category, expense)| ChartGroup {
                label: category.to_string(),
                values: vec![expense],
            })
            .collect();

        if groups.is_empty() {
            return Err(BudgetError::NothingToPlot);
        }

        Ok(Self {
            title: "Expenses by Category".to_string(),
            series: vec![EntryKind::Expense],
            groups,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn series(&self) -> &[EntryKind] {
        &self.series
    }

    pub fn groups(&self) -> &[ChartGroup] {
        &self.groups
    }

    /// Width of each bar so that every group fits in `width` columns
    fn bar_width(&self, width: u16) -> u16 {
        let groups = u16::try_from(self.groups.len()).unwrap_or(u16::MAX);
        let series = u16::try_from(self.series.len()).unwrap_or(u16::MAX);
        let bars = groups.saturating_mul(series).max(1);
        let gaps = groups
            .saturating_sub(1)
            .saturating_mul(GROUP_GAP)
            .saturating_add(
                groups
                    .saturating_mul(series.saturating_sub(1))
                    .saturating_mul(BAR_GAP),
            );

        (width.saturating_sub(gaps) / bars).clamp(1, MAX_BAR_WIDTH)
    }

    /// Draw the chart, its legend and a key hint into `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, currency_symbol: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let block = Block::bordered()
            .title(Line::from(self.title.as_str()).centered())
            .title(Line::from(format!("Amount ({})", currency_symbol)).right_aligned());

        let inner_width = chunks[0].width.saturating_sub(2);
        let mut chart = BarChart::default()
            .block(block)
            .bar_width(self.bar_width(inner_width))
            .bar_gap(BAR_GAP)
            .group_gap(GROUP_GAP)
            .max(self.max_cents().max(1));

        for group in &self.groups {
            let bars: Vec<Bar> = self
                .series
                .iter()
                .zip(&group.values)
                .map(|(kind, value)| {
                    Bar::default()
                        .value(value.cents().max(0) as u64)
                        .text_value(value.format_with_symbol(currency_symbol))
                        .style(Style::new().fg(series_color(*kind)))
                        .value_style(Style::new().fg(Color::Black).bg(series_color(*kind)))
                })
                .collect();

            chart = chart.data(
                BarGroup::default()
                    .label(Line::from(group.label.as_str()).centered())
                    .bars(&bars),
            );
        }

        frame.render_widget(chart, chunks[0]);

        let legend: Vec<Span> = self
            .series
            .iter()
            .flat_map(|kind| {
                [
                    Span::styled("■ ", Style::new().fg(series_color(*kind))),
                    Span::raw(format!("{}  ", kind)),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(legend)).centered(), chunks[1]);

        frame.render_widget(
            Paragraph::new("Press q, Esc or Enter to close").centered(),
            chunks[2],
        );
    }

    fn max_cents(&self) -> u64 {
        self.groups
            .iter()
            .flat_map(|group| group.values.iter())
            .map(|value| value.cents().max(0) as u64)
            .max()
            .unwrap_or(0)
    }
}

fn series_color(kind: EntryKind) -> Color {
    match kind {
        EntryKind::Income => Color::Green,
        EntryKind::Expense => Color::Red,
    }
}
