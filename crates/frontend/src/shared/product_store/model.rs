use contracts::domain::a002_pallet_product::{ProductData, ASSIGNED_STATUS};

/// Working set of pallets on the live entries screen plus the one shown in
/// the detail panel.
///
/// Every mutation of the list ends in [`ProductList::list_changed`], which
/// clears a manual selection and then reconciles the selected pointer:
/// `list[0]` is auto-selected when nothing is selected or when the first
/// id differs from the last auto-selected one; otherwise the selected copy
/// is refreshed from the list so stale field values are not kept. A manual
/// selection therefore only holds between list changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductList {
    products: Vec<ProductData>,
    selected: Option<ProductData>,
    manual_select: bool,
    last_auto_selected_id: Option<String>,
}

impl ProductList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[ProductData] {
        &self.products
    }

    pub fn selected(&self) -> Option<&ProductData> {
        self.selected.as_ref()
    }

    pub fn is_manual_select(&self) -> bool {
        self.manual_select
    }

    /// Prepends `product`. Duplicates are the caller's concern.
    pub fn add(&mut self, product: ProductData) {
        self.products.insert(0, product);
        self.list_changed();
    }

    /// Sets the selected pointer verbatim, without checking the list.
    pub fn select(&mut self, product: ProductData) {
        self.selected = Some(product);
    }

    /// Selection made by the operator; suppresses auto-select until the
    /// list changes.
    pub fn select_manual(&mut self, product: ProductData) {
        self.manual_select = true;
        self.select(product);
    }

    /// Replaces the operator of product `id` in the list and in the selected
    /// copy. Returns `false` when neither held that id.
    pub fn update_operator(&mut self, id: &str, operator: &str) -> bool {
        self.update_product(id, |p| p.product.operator = operator.to_string())
    }

    /// Operator confirmed through the antenna record: operator plus status.
    pub fn mark_assigned(&mut self, id: &str, operator: &str) -> bool {
        self.update_product(id, |p| {
            p.product.operator = operator.to_string();
            p.product.status = ASSIGNED_STATUS.to_string();
        })
    }

    /// Removes product `id`. A removed selection falls back to the new first
    /// element, or to nothing.
    pub fn remove(&mut self, id: &str) -> Option<ProductData> {
        let index = self.products.iter().position(|p| p.id() == id)?;
        let removed = self.products.remove(index);
        if self.selected.as_ref().map(|s| s.id()) == Some(id) {
            self.selected = self.products.first().cloned();
        }
        self.list_changed();
        Some(removed)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn contains_epc(&self, epc: &str) -> bool {
        self.products.iter().any(|p| p.epc() == epc)
    }

    /// Products still waiting for an operator.
    pub fn pending_count(&self) -> usize {
        self.products
            .iter()
            .filter(|p| !p.product.is_assigned())
            .count()
    }

    fn update_product(&mut self, id: &str, apply: impl Fn(&mut ProductData)) -> bool {
        let mut in_list = false;
        for product in self.products.iter_mut().filter(|p| p.id() == id) {
            apply(product);
            in_list = true;
        }

        let mut in_selection = false;
        if let Some(selected) = self.selected.as_mut().filter(|s| s.id() == id) {
            apply(selected);
            in_selection = true;
        }

        if in_list {
            self.list_changed();
        }
        in_list || in_selection
    }

    fn list_changed(&mut self) {
        self.manual_select = false;
        self.reconcile();
    }

    fn reconcile(&mut self) {
        let Some(first) = self.products.first() else {
            return;
        };

        let first_is_new = self.last_auto_selected_id.as_deref() != Some(first.id());
        if self.selected.is_none() || first_is_new {
            self.last_auto_selected_id = Some(first.id().to_string());
            self.selected = Some(first.clone());
            return;
        }

        if let Some(selected) = self.selected.as_mut() {
            if let Some(current) = self.products.iter().find(|p| p.id() == selected.id()) {
                *selected = current.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_pallet_product::{Product, UNASSIGNED_OPERATOR};

    fn pallet(id: &str) -> ProductData {
        ProductData {
            success: true,
            product: Product {
                id: id.to_string(),
                name: format!("Tarima {}", id),
                epc: format!("000{}", id),
                operator: UNASSIGNED_OPERATOR.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn selected_id(list: &ProductList) -> Option<&str> {
        list.selected().map(|p| p.id())
    }

    #[test]
    fn test_add_places_product_first() {
        let mut list = ProductList::new();
        list.add(pallet("1"));
        list.add(pallet("2"));

        let ids: Vec<&str> = list.products().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(selected_id(&list), Some("2"));
    }

    #[test]
    fn test_add_does_not_deduplicate() {
        let mut list = ProductList::new();
        list.add(pallet("1"));
        assert!(list.contains_epc("0001"));
        list.add(pallet("1"));
        assert_eq!(list.products().len(), 2);
    }

    #[test]
    fn test_update_operator_reaches_selection() {
        let mut list = ProductList::new();
        list.add(pallet("1"));
        list.add(pallet("2"));
        list.select(pallet("1"));

        assert!(list.update_operator("1", "X"));
        assert_eq!(list.selected().unwrap().product.operator, "X");
        assert_eq!(list.products()[1].product.operator, "X");
        assert_eq!(list.pending_count(), 1);
    }

    #[test]
    fn test_update_operator_on_selection_outside_list() {
        let mut list = ProductList::new();
        list.select(pallet("9"));
        assert!(list.update_operator("9", "Rosa"));
        assert_eq!(list.selected().unwrap().product.operator, "Rosa");
        assert!(!list.update_operator("404", "Rosa"));
    }

    #[test]
    fn test_mark_assigned_sets_status() {
        let mut list = ProductList::new();
        list.add(pallet("1"));
        list.mark_assigned("1", "Ana");
        let selected = list.selected().unwrap();
        assert_eq!(selected.product.operator, "Ana");
        assert_eq!(selected.product.status, ASSIGNED_STATUS);
    }

    #[test]
    fn test_remove_selected_falls_back_to_first() {
        let mut list = ProductList::new();
        list.add(pallet("1"));
        list.add(pallet("2"));
        list.add(pallet("3"));
        list.select_manual(pallet("2"));

        assert!(list.remove("2").is_some());
        assert_eq!(selected_id(&list), Some("3"));
        assert_eq!(list.selected(), list.products().first());
    }

    #[test]
    fn test_remove_last_clears_selection() {
        let mut list = ProductList::new();
        list.add(pallet("1"));
        list.remove("1");
        assert!(list.selected().is_none());
        assert!(list.products().is_empty());
        assert!(list.remove("1").is_none());
    }

    #[test]
    fn test_remove_unselected_keeps_manual_choice_when_first_unchanged() {
        let mut list = ProductList::new();
        list.add(pallet("1"));
        list.add(pallet("2"));
        list.add(pallet("3"));
        list.select_manual(pallet("2"));

        list.remove("1");
        assert_eq!(selected_id(&list), Some("2"));
    }

    #[test]
    fn test_manual_selection_survives_list_change_with_same_first() {
        let mut list = ProductList::new();
        list.add(pallet("1"));
        list.add(pallet("2"));
        list.select_manual(list.products()[1].clone());

        list.update_operator("2", "Luis");
        assert_eq!(selected_id(&list), Some("1"));
        assert!(!list.is_manual_select());
    }

    #[test]
    fn test_manual_selection_holds_until_list_changes() {
        let mut list = ProductList::new();
        list.add(pallet("1"));
        list.add(pallet("2"));
        list.select_manual(list.products()[1].clone());

        assert!(!list.update_operator("9", "Luis"));
        assert!(list.is_manual_select());
        assert_eq!(selected_id(&list), Some("1"));

        // same first element: the manual pick is refreshed, not replaced
        list.update_operator("1", "Ana");
        assert!(!list.is_manual_select());
        assert_eq!(selected_id(&list), Some("1"));
        assert_eq!(list.selected().unwrap().product.operator, "Ana");
    }

    #[test]
    fn test_new_first_element_overrides_manual_selection() {
        let mut list = ProductList::new();
        list.add(pallet("1"));
        list.add(pallet("2"));
        list.select_manual(list.products()[1].clone());
        assert!(list.is_manual_select());

        list.add(pallet("3"));
        assert_eq!(selected_id(&list), Some("3"));
    }

    #[test]
    fn test_selection_resyncs_to_list_copy() {
        let mut list = ProductList::new();
        list.add(pallet("1"));
        list.add(pallet("2"));
        let mut stale = list.products()[1].clone();
        stale.product.name = "old".into();
        list.select(stale);

        list.update_operator("2", "Ana");
        // first id unchanged: selection refreshed, not replaced
        assert_eq!(selected_id(&list), Some("1"));
        assert_eq!(list.selected().unwrap().product.name, "Tarima 1");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut list = ProductList::new();
        list.add(pallet("1"));
        list.select_manual(pallet("1"));
        list.reset();
        assert_eq!(list, ProductList::default());
    }
}
