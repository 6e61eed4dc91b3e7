//! Per-element coverage rows linking `y[e]` to the selected sets.
use super::model_context::ModelBuilderContext;
use super::Var;

/// For every element `e`: `Σ_{j ∋ e} x[j] - r[e] * y[e] >= 0`.
///
/// `y[e]` may only be 1 when at least `r[e]` selected sets contain `e`. The
/// row never forces `y[e]` to 1, so the solver picks which eligible elements
/// count toward the threshold.
pub fn add_coverage_constraints(ctx: &mut ModelBuilderContext) {
    let instance = ctx.instance;
    for e in instance.element_ids() {
        let Some(requirement) = instance.requirement(e) else {
            continue;
        };
        let mut terms: Vec<(i64, Var)> = ctx.containing[e - 1]
            .iter()
            .map(|&j| (1, Var::Select(j)))
            .collect();
        terms.push((-i64::from(requirement), Var::Satisfied(e)));
        ctx.add_ge(format!("cover_{}", e), terms, 0);
    }
}
