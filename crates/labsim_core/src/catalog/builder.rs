//! Fluent builders for lab definitions
//!
//! Variable ids are assigned automatically in declaration order, so catalog
//! code refers to variables by key and never hand-picks ids.

use crate::model::{DependentVariableSpec, LabId, VariableId, VariableSpec};

use super::{Category, LabDefinition, QuizQuestion, SafetyOption};

/// Builder for one independent variable declaration.
#[derive(Debug, Clone)]
pub struct VariableBuilder {
    key: String,
    name: String,
    min: f64,
    max: f64,
    step: f64,
    default_value: Option<f64>,
    unit: String,
}

impl VariableBuilder {
    #[must_use]
    pub fn new(key: &str, name: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            min: 0.0,
            max: 100.0,
            step: 1.0,
            default_value: None,
            unit: String::new(),
        }
    }

    /// Set the slider range.
    #[must_use]
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the slider increment.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the starting value. Defaults to `min` if never called.
    #[must_use]
    pub fn default_value(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Set the display unit.
    #[must_use]
    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = unit.to_string();
        self
    }

    fn build(self, id: VariableId) -> VariableSpec {
        let default_value = self.default_value.unwrap_or(self.min);
        VariableSpec {
            id,
            key: self.key,
            name: self.name,
            min: self.min,
            max: self.max,
            step: self.step,
            default_value,
            unit: self.unit,
        }
    }
}

/// Builder for a complete lab definition.
pub struct LabBuilder {
    id: LabId,
    title: String,
    category: Category,
    variables: Vec<VariableBuilder>,
    dependent: Option<DependentVariableSpec>,
    controlled: Vec<String>,
    safety_options: Vec<SafetyOption>,
    quiz: Vec<QuizQuestion>,
    next_safety_id: u16,
}

impl LabBuilder {
    #[must_use]
    pub fn new(id: LabId, title: &str, category: Category) -> Self {
        Self {
            id,
            title: title.to_string(),
            category,
            variables: Vec::new(),
            dependent: None,
            controlled: Vec::new(),
            safety_options: Vec::new(),
            quiz: Vec::new(),
            next_safety_id: 0,
        }
    }

    /// Declare an independent variable. The first declaration supplies the
    /// `x` value of recorded data points.
    #[must_use]
    pub fn variable(mut self, variable: VariableBuilder) -> Self {
        self.variables.push(variable);
        self
    }

    /// Declare the dependent variable.
    #[must_use]
    pub fn dependent(mut self, name: &str, label: &str, unit: &str) -> Self {
        self.dependent = Some(DependentVariableSpec {
            name: name.to_string(),
            label: label.to_string(),
            unit: unit.to_string(),
        });
        self
    }

    /// Declare one controlled factor (display only).
    #[must_use]
    pub fn controlled(mut self, name: &str) -> Self {
        self.controlled.push(name.to_string());
        self
    }

    /// Add a safety checklist option. Ids are assigned in declaration order.
    #[must_use]
    pub fn safety(mut self, text: &str, is_correct: bool) -> Self {
        let id = self.next_safety_id;
        self.next_safety_id += 1;
        self.safety_options.push(SafetyOption {
            id,
            text: text.to_string(),
            is_correct,
        });
        self
    }

    /// Add a quiz question.
    #[must_use]
    pub fn quiz(mut self, prompt: &str, choices: &[&str], correct_index: usize) -> Self {
        self.quiz.push(QuizQuestion {
            prompt: prompt.to_string(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            correct_index,
        });
        self
    }

    /// Build the definition, assigning variable ids in declaration order.
    ///
    /// A lab that never declared a dependent variable gets a generic
    /// "Result" spec, matching the placeholder treatment of unimplemented
    /// labs elsewhere.
    #[must_use]
    pub fn build(self) -> LabDefinition {
        let variables = self
            .variables
            .into_iter()
            .enumerate()
            .map(|(i, v)| v.build(VariableId(i as u16)))
            .collect();

        let dependent = self.dependent.unwrap_or(DependentVariableSpec {
            name: "Result".to_string(),
            label: "Result".to_string(),
            unit: String::new(),
        });

        LabDefinition {
            id: self.id,
            title: self.title,
            category: self.category,
            variables,
            dependent,
            controlled: self.controlled,
            safety_options: self.safety_options,
            quiz: self.quiz,
        }
    }
}
