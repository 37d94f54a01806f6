//! Brand utility tests

use std::any::TypeId;
use std::collections::BTreeMap;

use brandkit_types::{
    Brand, BrandTag, Eur, EurAmount, PostId, PostTag, Record, Usd, UsdAmount, UserId, UserTag,
};

fn type_id<X: 'static>() -> TypeId {
    TypeId::of::<X>()
}

#[test]
fn distinct_tags_over_one_base_are_distinct_types() {
    let u64_brands = [
        ("user", type_id::<Brand<u64, UserTag>>()),
        ("post", type_id::<Brand<u64, PostTag>>()),
        ("record", type_id::<Brand<u64, Record>>()),
        ("plain", type_id::<u64>()),
    ];
    for (i, (left_name, left)) in u64_brands.iter().enumerate() {
        for (right_name, right) in &u64_brands[i + 1..] {
            assert_ne!(left, right, "{left_name} vs {right_name}");
        }
    }

    assert_ne!(type_id::<UsdAmount>(), type_id::<EurAmount>());
    assert_ne!(type_id::<UsdAmount>(), type_id::<f64>());
}

#[test]
fn same_tag_is_the_same_type() {
    assert_eq!(type_id::<UserId>(), type_id::<Brand<u64, UserTag>>());
    assert_eq!(type_id::<EurAmount>(), type_id::<Brand<f64, Eur>>());
}

#[test]
fn tag_names() {
    assert_eq!(Usd::NAME, "USD");
    assert_eq!(Eur::NAME, "EUR");
    assert_eq!(UserTag::NAME, "user");
    assert_eq!(PostTag::NAME, "post");
    assert_eq!(Record::NAME, "record");
    assert_eq!(PostId::tag_name(), "post");
}

#[test]
fn widening_preserves_value() {
    for raw in [0_u64, 1, 42, u64::MAX] {
        assert_eq!(UserId::from_unverified(raw).widen(), raw);
        assert_eq!(*PostId::from_unverified(raw), raw);
    }
}

#[test]
fn branded_ids_work_as_ordered_map_keys() {
    let mut titles: BTreeMap<PostId, &str> = BTreeMap::new();
    titles.insert(PostId::from_unverified(3), "Phantom types");
    titles.insert(PostId::from_unverified(1), "Newtypes");
    let order: Vec<u64> = titles.keys().map(|id| id.into_inner()).collect();
    assert_eq!(order, vec![1, 3]);
}

#[test]
fn amounts_sum_within_their_brand() {
    let total: EurAmount = [1.5, 2.5, 6.0]
        .into_iter()
        .map(EurAmount::from_unverified)
        .sum();
    assert_eq!(total, EurAmount::from_unverified(10.0));
}

#[test]
fn serde_ids_are_plain_numbers() {
    let ids = vec![UserId::from_unverified(7), UserId::from_unverified(42)];
    let json = serde_json::to_string(&ids).unwrap();
    assert_eq!(json, "[7,42]");
    let back: Vec<UserId> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ids);
}
