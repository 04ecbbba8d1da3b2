use proptest::prelude::*;
use std::collections::HashSet;
use stockroom::api::StockroomApi;
use stockroom::model::{parse_price, Draft, ProductId};
use stockroom::store::memory::MemoryCatalog;
use stockroom::store::Catalog;

#[derive(Debug, Clone)]
enum Op {
    Create(String, u64),
    Update(u64, u64),
    Delete(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-zđơư ]{0,12}", 0u64..1_000_000).prop_map(|(name, price)| Op::Create(name, price)),
        (1u64..12, 0u64..1_000_000).prop_map(|(id, price)| Op::Update(id, price)),
        (1u64..12).prop_map(Op::Delete),
    ]
}

fn apply(api: &mut StockroomApi<MemoryCatalog>, op: &Op) {
    match op {
        Op::Create(name, price) => {
            api.create_product(Draft::new(name.clone(), *price));
        }
        Op::Update(id, price) => {
            if let Some(product) = api.catalog().get(ProductId::new(*id)) {
                let edited = product.with_fields(product.name.clone(), *price);
                api.update_product(edited);
            }
        }
        Op::Delete(id) => {
            api.delete_product(&id.to_string()).unwrap();
        }
    }
}

proptest! {
    #[test]
    fn prop_ids_stay_unique_and_total_matches(ops in prop::collection::vec(op(), 0..40)) {
        let mut api = StockroomApi::new(MemoryCatalog::seeded(vec![Draft::new("bút", 10000)]));
        let mut ever_seen: HashSet<ProductId> = HashSet::new();

        for op in &ops {
            apply(&mut api, op);

            let products = api.catalog().list();
            let ids: HashSet<ProductId> = products.iter().map(|p| p.id).collect();
            prop_assert_eq!(ids.len(), products.len());

            let expected: u128 = products.iter().map(|p| u128::from(p.price)).sum();
            prop_assert_eq!(api.catalog().total(), expected);

            let list = api.list_view().unwrap();
            prop_assert_eq!(list.total(), expected);
            prop_assert_eq!(&list.model().rows[..], products);

            if let Op::Create(..) = op {
                let newest = products.last().unwrap().id;
                prop_assert!(ever_seen.insert(newest), "id {} was reused", newest);
            }
            ever_seen.extend(ids);
        }
    }

    #[test]
    fn prop_saving_unchanged_edit_form_is_identity(price in 0u64..10_000_000, name in "[a-z]{1,10}") {
        let mut api = StockroomApi::new(MemoryCatalog::new());
        let created = api.create_product(Draft::new(name, price)).affected_products[0].clone();
        let before = api.catalog().list().to_vec();

        api.edit_product(&created.id.to_string()).unwrap();
        api.submit().unwrap();

        prop_assert_eq!(api.catalog().list(), &before[..]);
    }

    #[test]
    fn prop_parse_price_never_panics(input in ".*") {
        let _ = parse_price(&input);
    }

    #[test]
    fn prop_parse_price_reads_plain_digits(value in 0u64..u64::MAX) {
        prop_assert_eq!(parse_price(&value.to_string()), value);
    }
}
