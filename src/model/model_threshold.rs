use super::model_context::ModelBuilderContext;
use super::Var;

/// At least `threshold` elements are marked satisfied: `Σ y[e] >= P`.
pub fn add_threshold_constraint(ctx: &mut ModelBuilderContext) {
    let instance = ctx.instance;
    let terms = instance.element_ids().map(|e| (1, Var::Satisfied(e))).collect();
    let threshold = i64::try_from(instance.threshold()).unwrap_or(i64::MAX);
    ctx.add_ge("threshold".to_string(), terms, threshold);
}
