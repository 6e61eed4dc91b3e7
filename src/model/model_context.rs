//! Shared state threaded through the constraint builders.
use super::model_coverage::add_coverage_constraints;
use super::model_objective::add_cost_objective;
use super::model_threshold::add_threshold_constraint;
use super::{Constraint, Model, Terms};
use crate::instance::{Instance, SetId};

pub struct ModelBuilderContext<'a> {
    pub instance: &'a Instance,
    pub model: Model,
    /// For element `e` (index `e - 1`), the sets whose membership contains it.
    pub containing: Vec<Vec<SetId>>,
}

impl<'a> ModelBuilderContext<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            model: Model::empty(instance.num_sets(), instance.num_elements()),
            containing: instance.containing_sets(),
        }
    }

    pub fn into_model(self) -> Model {
        self.model
    }

    pub fn add_ge(&mut self, name: String, terms: Terms, lower_bound: i64) {
        self.model.constraints.push(Constraint {
            name,
            terms,
            lower_bound,
        });
    }
}

/// Objective first, then the threshold row, then one coverage row per element.
pub fn build_model_pipeline(ctx: &mut ModelBuilderContext) {
    add_cost_objective(ctx);
    add_threshold_constraint(ctx);
    add_coverage_constraints(ctx);
}
