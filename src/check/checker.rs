use std::fs;

use anyhow::{Context, Result};

use crate::check::outcome::Outcome;
use crate::common::helpers::{print_error_chain, root_cause_message};
use crate::config::CheckConfig;
use crate::connection::{DatabaseConnection, DatabaseConnectionFactory, SqliteConnection};
use crate::inspect::inspector::SchemaInspector;
use crate::inspect::presence::ColumnPresence;

pub struct ColumnPresenceChecker {
    config: CheckConfig,
}

impl ColumnPresenceChecker {
    pub fn new(config: CheckConfig) -> Self {
        ColumnPresenceChecker { config }
    }

    /// Runs the check and writes the one-line report. Only a failure to write
    /// the report is returned as an error.
    pub async fn run(&self) -> Result<Outcome> {
        let database_path = &self.config.database_path;

        if !database_path.exists() {
            warn!("Database not found at {}", database_path.display());
            let outcome = Outcome::NotFound {
                path: database_path.clone(),
            };
            self.write_report(&outcome)?;
            return Ok(outcome);
        }

        let outcome = match self.inspect().await {
            Ok(presence) => self.outcome_from(presence),
            Err(err) => {
                print_error_chain(&err);
                Outcome::Error {
                    message: root_cause_message(&err),
                }
            }
        };

        if let Err(err) = self.write_report(&outcome) {
            print_error_chain(&err);
            let outcome = Outcome::Error {
                message: root_cause_message(&err),
            };
            self.write_report(&outcome)?;
            return Ok(outcome);
        }

        Ok(outcome)
    }

    async fn inspect(&self) -> Result<ColumnPresence> {
        let factory =
            DatabaseConnectionFactory::<SqliteConnection>::new(self.config.database_path.clone());
        let connection = factory.create_connection().await.with_context(|| {
            format!(
                "Failed to open database {}",
                self.config.database_path.display()
            )
        })?;

        debug!("Inspecting table {}", self.config.table);

        let inspector = SchemaInspector::new(connection.pool.clone());
        let columns = inspector.table_columns(&self.config.table).await;

        connection.close().await;

        let columns = columns?;
        if columns.is_empty() {
            debug!("Table {} has no columns or does not exist", self.config.table);
        }

        Ok(ColumnPresence::scan(&columns, &self.config.column))
    }

    fn outcome_from(&self, presence: ColumnPresence) -> Outcome {
        let column = self.config.column.clone();

        if presence.found {
            Outcome::Success { column }
        } else {
            Outcome::Failure {
                column,
                existing: presence.existing,
            }
        }
    }

    fn write_report(&self, outcome: &Outcome) -> Result<()> {
        let output_path = &self.config.output_path;

        fs::write(output_path, outcome.to_string())
            .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

        debug!("Report written to {}", output_path.display());

        Ok(())
    }
}
