use locus::{Value, params};

#[test]
fn empty_params() {
    let p = params! {};
    assert!(p.is_empty());
}

#[test]
fn mixed_value_kinds() {
    let p = params! {
        "count" => 3,
        "name" => "Bob",
        "score" => 9.5_f64,
        "ready" => true
    };
    assert_eq!(p.len(), 4);
    assert_eq!(p["count"].as_i64(), Some(3));
    assert_eq!(p["name"].as_str(), Some("Bob"));
    assert_eq!(p["score"].as_f64(), Some(9.5));
    assert_eq!(p["ready"], Value::Bool(true));
}

#[test]
fn trailing_comma() {
    let p = params! {
        "a" => 1,
        "b" => 2,
    };
    assert_eq!(p.len(), 2);
}

#[test]
fn keys_keep_insertion_order() {
    let p = params! { "z" => 1, "a" => 2, "m" => 3 };
    let keys: Vec<&str> = p.keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn later_duplicate_key_wins() {
    let p = params! { "k" => "first", "k" => "second" };
    assert_eq!(p.len(), 1);
    assert_eq!(p["k"].as_str(), Some("second"));
}

#[test]
fn non_literal_keys_and_owned_strings() {
    let key = String::from("who");
    let p = params! { key => String::from("me"), 7 => 0_u8 };
    assert_eq!(p["who"].as_str(), Some("me"));
    assert_eq!(p["7"].as_u64(), Some(0));
}
