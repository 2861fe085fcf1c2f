//! Item types: item index → name, category and description

use indexmap::IndexMap;

use super::{FieldsResolver, ItemType, collect_table};
use crate::error::{Resolved, Result, SkipReason};
use crate::input::ItemDefinition;
use crate::lookup::{CategoryResolver, Prefabs, SchemaIndex};

/// Lookups shared by every entry of one types pass
struct TypeContext<'a> {
    schema: SchemaIndex<'a>,
    categories: CategoryResolver<'a>,
    prefabs: Prefabs<'a>,
}

impl<'a> FieldsResolver<'a> {
    pub fn types(&self) -> Result<IndexMap<String, ItemType>> {
        let game = &self.bundle.items_game;
        let items = game.items()?;
        let ctx = TypeContext {
            schema: SchemaIndex::new(self.bundle.schema.items()?),
            categories: CategoryResolver::new(&self.bundle.categories, self.localization),
            prefabs: Prefabs::new(game.prefabs.as_ref()),
        };

        Ok(collect_table(
            "types",
            items
                .iter()
                .filter(|(index, _)| !self.config.is_excluded_item(index))
                .map(|(index, item)| {
                    let outcome = self
                        .item_type(&ctx, index, item)
                        .map(|item_type| (index.clone(), item_type));
                    (index, outcome)
                }),
        ))
    }

    fn item_type(
        &self,
        ctx: &TypeContext<'a>,
        index: &str,
        item: &'a ItemDefinition,
    ) -> Resolved<ItemType> {
        let name_code = ctx
            .prefabs
            .inherited(item, |def| def.item_name.as_deref())
            .ok_or(SkipReason::MissingField("item_name"))?;
        let name = self.localization.require(name_code)?;

        let schema_item = ctx
            .schema
            .get(index)
            .ok_or_else(|| SkipReason::NotInSchema(index.to_string()))?;
        let type_code = schema_item
            .item_type_name
            .as_deref()
            .ok_or(SkipReason::MissingField("item_type_name"))?;
        let category = ctx.categories.resolve(type_code)?;

        let description = ctx
            .prefabs
            .from_prefabs(item, |def| def.item_description.as_deref())
            .and_then(|code| self.localization.resolve(code))
            .map(str::to_string);

        Ok(ItemType {
            name: name.to_string(),
            category: category.to_string(),
            description,
        })
    }
}
