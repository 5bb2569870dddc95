use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use webcalc::Evaluation;

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// `add(2, 3) = 5`, or just `5` when raw
    pub fn format_evaluation(&self, evaluation: &Evaluation, raw: bool) -> String {
        if raw {
            format!("{}\n", evaluation.value)
        } else {
            format!("{}\n", evaluation)
        }
    }

    pub fn format_evaluations(&self, evaluations: &[Evaluation], raw: bool) -> String {
        if raw {
            return evaluations
                .iter()
                .map(|evaluation| self.format_evaluation(evaluation, true))
                .collect();
        }

        if evaluations.is_empty() {
            return "No calls to evaluate\n".to_string();
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Call").set_alignment(CellAlignment::Left),
            Cell::new("Result").set_alignment(CellAlignment::Right),
        ]));

        for evaluation in evaluations {
            table.add_row(Row::from(vec![
                Cell::new(&evaluation.call).set_alignment(CellAlignment::Left),
                Cell::new(evaluation.value).set_alignment(CellAlignment::Right),
            ]));
        }

        format!("{}\n", table)
    }
}
