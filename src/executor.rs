//! Applies parsed statements to a [`Table`].

use tracing::debug;

use crate::error::ExecuteError;
use crate::row::Row;
use crate::statement::Statement;
use crate::table::Table;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecuteOutcome {
    Inserted,
    /// Every stored row, in insertion order.
    Selected(Vec<Row>),
}

pub fn execute(statement: &Statement, table: &mut Table) -> Result<ExecuteOutcome, ExecuteError> {
    match statement {
        Statement::Insert(row) => {
            execute_insert(row, table)?;
            Ok(ExecuteOutcome::Inserted)
        }
        Statement::Select => Ok(ExecuteOutcome::Selected(execute_select(table))),
    }
}

/// Append `row` after the last stored row. Duplicate ids are accepted.
fn execute_insert(row: &Row, table: &mut Table) -> Result<(), ExecuteError> {
    if table.is_full() {
        return Err(ExecuteError::TableFull);
    }

    let row_index = table.num_rows();
    row.encode(table.slot(row_index));
    table.commit_row();
    debug!(row_index, id = row.id, "inserted row");
    Ok(())
}

fn execute_select(table: &mut Table) -> Vec<Row> {
    let num_rows = table.num_rows();
    debug!(num_rows, "scanning table");
    (0..num_rows).map(|i| Row::decode(table.slot(i))).collect()
}
