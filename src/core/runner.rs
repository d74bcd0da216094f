use crate::core::Exercise;
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;

pub struct ExerciseRunner<E: Exercise> {
    exercise: E,
    format: OutputFormat,
}

impl<E: Exercise> ExerciseRunner<E> {
    pub fn new(exercise: E) -> Self {
        Self {
            exercise,
            format: OutputFormat::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn run(&self) -> Result<String> {
        tracing::debug!("Running exercise '{}'", self.exercise.name());

        let report = self.exercise.run().map_err(|e| {
            tracing::debug!("Exercise '{}' failed: {}", self.exercise.name(), e);
            e
        })?;
        tracing::debug!(
            "Exercise '{}' produced {} lines",
            report.exercise,
            report.lines.len()
        );

        report.render(self.format)
    }
}
