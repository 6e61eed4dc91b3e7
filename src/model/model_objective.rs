use super::model_context::ModelBuilderContext;
use super::Var;

/// Minimize the total cost of the selected sets.
pub fn add_cost_objective(ctx: &mut ModelBuilderContext) {
    let instance = ctx.instance;
    ctx.model.objective = instance
        .set_ids()
        .filter_map(|j| instance.cost(j).map(|c| (i64::from(c), Var::Select(j))))
        .collect();
}
