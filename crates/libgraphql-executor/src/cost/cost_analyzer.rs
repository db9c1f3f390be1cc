use crate::ast;
use crate::cost::CostDetail;
use crate::cost::QueryCost;
use crate::operation::ExecutionContext;
use crate::types::Field;
use crate::types::ObjectOrInterfaceType;

/// Computes the [`QueryCost`] of selection sets within a single
/// [`ExecutionContext`].
///
/// The analyzer assumes the document has already been validated. Selections
/// that cannot be resolved against the schema (unknown fields, spreads of
/// undefined fragments, type conditions naming non-field-bearing types) are
/// skipped and contribute nothing.
#[derive(Debug)]
pub struct CostAnalyzer<'ctx, 'schema, 'doc> {
    ctx: &'ctx ExecutionContext<'schema, 'doc>,
}
impl<'ctx, 'schema, 'doc> CostAnalyzer<'ctx, 'schema, 'doc> {
    pub fn new(ctx: &'ctx ExecutionContext<'schema, 'doc>) -> Self {
        Self { ctx }
    }

    /// Compute the cost of `selection_set` evaluated against `parent_type`,
    /// with paths rooted at the selection set itself.
    pub fn compute(
        &self,
        selection_set: &ast::query::SelectionSet,
        parent_type: ObjectOrInterfaceType<'schema>,
    ) -> QueryCost {
        let mut detail = CostDetail::default();
        let total = self.selection_set_cost(selection_set, parent_type, "", &mut detail);
        QueryCost { total, detail }
    }

    fn field_cost(
        &self,
        field: &ast::query::Field,
        field_def: &'schema Field,
        base_path: &str,
        detail: &mut CostDetail,
    ) -> u64 {
        let path = field_path(base_path, field);

        let mut cost = field_def.cost();
        if cost > 0 {
            detail.add(path.as_str(), cost);
        }

        if field.selection_set.items.is_empty() {
            return cost;
        }

        let field_type = field_def
            .type_annotation()
            .innermost_type(self.ctx.schema())
            .and_then(|type_| type_.as_object_or_interface());
        match field_type {
            Some(field_type) => {
                cost = cost.saturating_add(self.selection_set_cost(
                    &field.selection_set,
                    field_type,
                    path.as_str(),
                    detail,
                ));
            },
            None => log::trace!(
                "`{path}` has a selection set but its type (`{}`) has no fields.",
                field_def.type_annotation(),
            ),
        }
        cost
    }

    fn selection_set_cost(
        &self,
        selection_set: &ast::query::SelectionSet,
        parent_type: ObjectOrInterfaceType<'schema>,
        base_path: &str,
        detail: &mut CostDetail,
    ) -> u64 {
        use ast::query::Selection;
        use ast::query::TypeCondition;
        let schema = self.ctx.schema();

        let mut cost: u64 = 0;
        let mut max_fragment: Option<(u64, CostDetail)> = None;
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => {
                    let Some(field_def) = parent_type.field(field.name.as_str()) else {
                        log::trace!(
                            "Skipping unknown field `{}.{}`.",
                            parent_type.name(),
                            field.name,
                        );
                        continue;
                    };
                    cost = cost.saturating_add(self.field_cost(field, field_def, base_path, detail));
                },

                Selection::InlineFragment(inline_frag) => {
                    let (Some(iface), Some(TypeCondition::On(cond_type_name))) =
                        (parent_type.as_interface(), &inline_frag.type_condition) else {
                        cost = cost.saturating_add(self.selection_set_cost(
                            &inline_frag.selection_set,
                            parent_type,
                            base_path,
                            detail,
                        ));
                        continue;
                    };

                    let impl_type = schema
                        .implementations_of(iface.name())
                        .iter()
                        .find(|impl_name| *impl_name == cond_type_name)
                        .and_then(|impl_name| schema.resolve_object_or_interface(impl_name));
                    let Some(impl_type) = impl_type else { continue };

                    let mut frag_detail = CostDetail::default();
                    let frag_cost = self.selection_set_cost(
                        &inline_frag.selection_set,
                        impl_type,
                        base_path,
                        &mut frag_detail,
                    );
                    let max_cost = max_fragment.as_ref().map_or(0, |(max_cost, _)| *max_cost);
                    if frag_cost > max_cost {
                        max_fragment = Some((frag_cost, frag_detail));
                    }
                },

                Selection::FragmentSpread(spread) => {
                    let Some(frag_def) = self.ctx.fragment(spread.fragment_name.as_str()) else {
                        log::trace!("Skipping spread of unknown fragment `{}`.", spread.fragment_name);
                        continue;
                    };
                    let TypeCondition::On(frag_type_name) = &frag_def.type_condition;
                    let Some(frag_type) = schema.resolve_object_or_interface(frag_type_name) else {
                        continue;
                    };
                    cost = cost.saturating_add(self.selection_set_cost(
                        &frag_def.selection_set,
                        frag_type,
                        base_path,
                        detail,
                    ));
                },
            }
        }

        if let Some((frag_cost, frag_detail)) = max_fragment {
            detail.merge(frag_detail);
            cost = cost.saturating_add(frag_cost);
        }
        cost
    }
}

fn field_path(base_path: &str, field: &ast::query::Field) -> String {
    let mut path = String::with_capacity(base_path.len() + field.name.len() + 1);
    if !base_path.is_empty() {
        path.push_str(base_path);
        path.push('.');
    }
    if let Some(alias) = &field.alias {
        path.push_str(alias);
        path.push('=');
    }
    path.push_str(field.name.as_str());
    path
}
